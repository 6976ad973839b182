// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingRequest, State};
use booking_domain::{
    AvailabilityStore, Booking, BookingId, BookingLedger, BookingSettings, BookingStatus,
    CustomerInfo, DayAvailability, SlotId, Stay, TimeSlot, inclusive_date_range,
};
use rust_decimal::Decimal;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn create_test_settings() -> BookingSettings {
    BookingSettings::default()
}

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2024-05-20 12:00 UTC)
}

pub fn create_test_customer() -> CustomerInfo {
    CustomerInfo {
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: Some(String::from("555-0100")),
        notes: None,
    }
}

/// Whole-day records for 2024-06-01 through 2024-06-10.
pub fn create_test_store() -> AvailabilityStore {
    let settings: BookingSettings = create_test_settings();
    AvailabilityStore::from_days(
        inclusive_date_range(date!(2024 - 06 - 01), date!(2024 - 06 - 10))
            .map(|date| DayAvailability::from_defaults(date, &settings)),
    )
}

/// Adds an hourly record for `date` with default slots, where `slot-1` costs 75.
pub fn add_hourly_day(store: &mut AvailabilityStore, date: Date) {
    let settings: BookingSettings = BookingSettings {
        use_hourly_booking: true,
        ..create_test_settings()
    };
    let mut day: DayAvailability = DayAvailability::from_defaults(date, &settings);
    let mut slot: TimeSlot = day.slot(&SlotId::new("slot-1")).unwrap().clone();
    slot.price = Decimal::from(75);
    day.update_slot(slot).unwrap();
    store.upsert_day(day);
}

pub fn create_test_state() -> State {
    State::from_parts(create_test_store(), BookingLedger::new())
}

pub fn create_single_day_request(date: Date, quantity: u32) -> BookingRequest {
    BookingRequest::single_day(date, quantity, create_test_customer())
}

pub fn create_range_request(check_in: Date, check_out: Date, quantity: u32) -> BookingRequest {
    BookingRequest::range(check_in, check_out, quantity, create_test_customer())
}

/// A single-day booking as produced by a calendar import.
pub fn create_imported_booking(id: &str, date: Date) -> Booking {
    Booking {
        id: BookingId::new(id),
        date,
        stay: Stay::SingleDay,
        slot: None,
        quantity: 1,
        total_price: Decimal::from(100),
        customer: CustomerInfo::new("Imported Guest", "imported@example.com"),
        status: BookingStatus::Confirmed,
        imported: true,
        created_at: create_test_now(),
        updated_at: create_test_now(),
    }
}
