// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between bookings and calendar events.

use crate::error::MalformedInterchangeRecord;
use crate::event::CalendarEvent;
use crate::ics::{ImportReport, parse_calendar, write_calendar};
use booking_domain::{
    Booking, BookingId, BookingSettings, BookingStatus, CustomerInfo, SlotWindow, Stay,
    format_display_date,
};
use time::OffsetDateTime;
use tracing::info;
use ulid::Ulid;

const IMPORTED_EMAIL: &str = "imported@example.com";
const IMPORTED_NAME: &str = "Imported Booking";
const FALLBACK_LOCATION: &str = "Booking Location";
const NOT_AVAILABLE: &str = "N/A";

/// Bookings read from a calendar file, plus the events that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedBookings {
    /// One new booking per accepted event.
    pub bookings: Vec<Booking>,
    /// Events that could not be read.
    pub rejected: Vec<MalformedInterchangeRecord>,
}

fn describe(booking: &Booking) -> String {
    let customer: &CustomerInfo = &booking.customer;
    let mut description: String = format!(
        "Customer: {}\nEmail: {}\nPhone: {}\nQuantity: {}\nTotal: ${}\nNotes: {}",
        customer.name,
        customer.email,
        customer.phone.as_deref().unwrap_or(NOT_AVAILABLE),
        booking.quantity,
        booking.total_price,
        customer.notes.as_deref().unwrap_or(NOT_AVAILABLE),
    );
    if let Some(range) = booking.range() {
        description.push_str(&format!(
            "\nCheck-in: {}\nCheck-out: {}",
            format_display_date(range.check_in),
            format_display_date(range.check_out)
        ));
    }
    description
}

/// Maps a booking to the event written for it on export.
///
/// Range bookings span check-in to check-out and are all-day unless a
/// check-in or check-out time was given. Single-day bookings span their date
/// and are all-day unless they have a start time.
///
/// # Arguments
///
/// * `booking` - The booking to export
/// * `settings` - Operator settings, for the business name
#[must_use]
pub fn booking_to_event(booking: &Booking, settings: &BookingSettings) -> CalendarEvent {
    let location: String = if settings.business_name.trim().is_empty() {
        String::from(FALLBACK_LOCATION)
    } else {
        settings.business_name.clone()
    };

    match &booking.stay {
        Stay::Range(range) => CalendarEvent {
            summary: format!(
                "Booking - {} ({} nights)",
                booking.customer.name, range.nights
            ),
            description: Some(describe(booking)),
            start_date: range.check_in,
            end_date: range.check_out,
            start_time: range.check_in_time,
            end_time: range.check_out_time,
            all_day: range.check_in_time.is_none() && range.check_out_time.is_none(),
            location: Some(location),
        },
        Stay::SingleDay => {
            let start_time = booking.slot.as_ref().map(|slot| slot.start_time);
            CalendarEvent {
                summary: format!("Booking - {}", booking.customer.name),
                description: Some(describe(booking)),
                start_date: booking.date,
                end_date: booking.date,
                start_time,
                end_time: booking.slot.as_ref().and_then(|slot| slot.end_time),
                all_day: start_time.is_none(),
                location: Some(location),
            }
        }
    }
}

/// Maps an imported event to a new booking.
///
/// The booking is single-day on the event's start date, with quantity 1,
/// the default price and confirmed status. The summary becomes the customer
/// name and the description becomes the notes. Event times are kept as the
/// booking's time window.
///
/// # Arguments
///
/// * `event` - The imported event
/// * `settings` - Operator settings, for the default price
/// * `now` - Creation timestamp
#[must_use]
pub fn event_to_booking(
    event: &CalendarEvent,
    settings: &BookingSettings,
    now: OffsetDateTime,
) -> Booking {
    let name: &str = match event.summary.trim() {
        "" => IMPORTED_NAME,
        summary => summary,
    };

    Booking {
        id: BookingId::new(&format!("imported-{}", Ulid::new())),
        date: event.start_date,
        stay: Stay::SingleDay,
        slot: event.start_time.map(|start_time| SlotWindow {
            slot_id: None,
            start_time,
            end_time: event.end_time,
        }),
        quantity: 1,
        total_price: settings.default_price,
        customer: CustomerInfo {
            notes: event.description.clone(),
            ..CustomerInfo::new(name, IMPORTED_EMAIL)
        },
        status: BookingStatus::Confirmed,
        imported: true,
        created_at: now,
        updated_at: now,
    }
}

/// Writes every booking as one calendar document.
#[must_use]
pub fn export_bookings(
    bookings: &[Booking],
    settings: &BookingSettings,
    now: OffsetDateTime,
) -> String {
    let events: Vec<CalendarEvent> = bookings
        .iter()
        .map(|booking| booking_to_event(booking, settings))
        .collect();
    info!(count = events.len(), "Bookings exported");
    write_calendar(&events, now)
}

/// Reads a calendar document and converts each accepted event to a booking.
///
/// The caller appends the bookings to the ledger. Imported bookings do not
/// commit capacity.
#[must_use]
pub fn import_bookings(
    text: &str,
    settings: &BookingSettings,
    now: OffsetDateTime,
) -> ImportedBookings {
    let report: ImportReport = parse_calendar(text);
    let bookings: Vec<Booking> = report
        .events
        .iter()
        .map(|event| event_to_booking(event, settings, now))
        .collect();
    info!(
        imported = bookings.len(),
        skipped = report.rejected.len(),
        "Bookings imported"
    );

    ImportedBookings {
        bookings,
        rejected: report.rejected,
    }
}
