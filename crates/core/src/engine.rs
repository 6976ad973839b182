// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation, pricing and commit planning for booking requests.
//!
//! A request moves from received to validated and then either to committed
//! (a [`BookingOutcome`] whose commits the caller applies) or to rejected (a
//! single [`BookingError`]). Nothing here mutates the store it is given.
//!
//! The validate-then-commit sequence is check-then-act. Callers that share a
//! store between writers must serialize calls to [`create_booking`] and
//! [`apply_commits`].

use crate::error::BookingError;
use crate::request::{BookingRequest, StayRequest};
use booking_domain::{
    AvailabilityStore, Booking, BookingId, BookingSettings, BookingStatus, DayAvailability,
    DomainError, FeeBreakdown, FeeInputs, RangeStay, SlotId, SlotWindow, Stay, TimeSlot,
    compute_fees, date_range, nights_between, validate_customer_info, validate_quantity,
};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, Time};
use tracing::{debug, info};
use ulid::Ulid;

/// One capacity change produced by a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityCommit {
    /// The occupied date.
    pub date: Date,
    /// The slot to commit against. `None` commits against the day itself.
    pub slot_id: Option<SlotId>,
    /// Units to commit.
    pub quantity: u32,
}

/// A validated booking and the capacity changes it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    /// The booking to append to the ledger.
    pub booking: Booking,
    /// One commit per occupied date, in date order.
    pub commits: Vec<CapacityCommit>,
}

/// The price of a request, as shown before the customer confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    /// Unit price on the check-in date.
    pub unit_price: Decimal,
    /// Nights for range requests.
    pub nights: Option<u32>,
    /// Unit price times quantity times nights (or one).
    pub base_price: Decimal,
    /// Surcharges for range requests.
    pub fees: Option<FeeBreakdown>,
    /// Base price plus surcharges.
    pub total_price: Decimal,
}

struct RangeDates {
    check_in: Date,
    check_out: Date,
    nights: u32,
    check_in_time: Option<Time>,
    check_out_time: Option<Time>,
    early_check_in_requested: bool,
    late_check_out_requested: bool,
}

struct Plan<'a> {
    primary: &'a DayAvailability,
    selected_slot: Option<&'a TimeSlot>,
    range: Option<RangeDates>,
    quote: PriceQuote,
    commits: Vec<CapacityCommit>,
}

fn validate_stay(
    settings: &BookingSettings,
    request: &BookingRequest,
) -> Result<Option<RangeDates>, BookingError> {
    let StayRequest::Range {
        check_in,
        check_out,
        check_in_time,
        check_out_time,
        early_check_in_requested,
        late_check_out_requested,
    } = &request.stay
    else {
        return Ok(None);
    };

    if !settings.allow_range_booking {
        return Err(BookingError::RangeBookingDisabled);
    }

    let (Some(check_in), Some(check_out)) = (*check_in, *check_out) else {
        return Err(BookingError::MissingDates);
    };

    let nights: u32 = nights_between(check_in, check_out);
    let minimum: u32 = settings.effective_minimum_nights();
    if nights < minimum {
        return Err(BookingError::BelowMinimumStay { nights, minimum });
    }

    Ok(Some(RangeDates {
        check_in,
        check_out,
        nights,
        check_in_time: *check_in_time,
        check_out_time: *check_out_time,
        early_check_in_requested: *early_check_in_requested,
        late_check_out_requested: *late_check_out_requested,
    }))
}

/// Checks one occupied date. A slot is checked only when the day is hourly
/// and the request names one; everything else draws on the day's own
/// capacity.
fn check_capacity<'a>(
    day: &'a DayAvailability,
    slot_id: Option<&SlotId>,
    quantity: u32,
) -> Result<(CapacityCommit, Option<&'a TimeSlot>), BookingError> {
    let Some(slot_id) = slot_id.filter(|_| day.is_hourly()) else {
        let remaining: u32 = day.day_remaining();
        if remaining < quantity {
            return Err(BookingError::InsufficientCapacity {
                date: day.date,
                requested: quantity,
                remaining,
            });
        }
        let commit: CapacityCommit = CapacityCommit {
            date: day.date,
            slot_id: None,
            quantity,
        };
        return Ok((commit, None));
    };

    let slot: &TimeSlot = day
        .slot(slot_id)
        .filter(|slot| slot.available)
        .ok_or_else(|| BookingError::SlotUnavailable {
            date: day.date,
            slot_id: slot_id.clone(),
        })?;

    if slot.remaining() < quantity {
        return Err(BookingError::InsufficientCapacity {
            date: day.date,
            requested: quantity,
            remaining: slot.remaining(),
        });
    }

    let commit: CapacityCommit = CapacityCommit {
        date: day.date,
        slot_id: Some(slot.id.clone()),
        quantity,
    };
    Ok((commit, Some(slot)))
}

fn build_plan<'a>(
    store: &'a AvailabilityStore,
    settings: &BookingSettings,
    request: &BookingRequest,
) -> Result<Plan<'a>, BookingError> {
    validate_customer_info(&request.customer).map_err(|err| match err {
        DomainError::InvalidCustomerInfo { field } => BookingError::InvalidCustomerInfo { field },
        _ => BookingError::InvalidCustomerInfo { field: "customer" },
    })?;
    validate_quantity(request.quantity).map_err(|_| BookingError::InvalidQuantity {
        quantity: request.quantity,
    })?;

    let range: Option<RangeDates> = validate_stay(settings, request)?;
    let dates: Vec<Date> = match &range {
        None => vec![request.date],
        Some(range) => date_range(range.check_in, range.check_out).collect(),
    };

    let days: Vec<&DayAvailability> = dates
        .iter()
        .map(|date| {
            store
                .get(*date)
                .filter(|day| day.is_available)
                .ok_or(BookingError::DateUnavailable { date: *date })
        })
        .collect::<Result<_, _>>()?;

    let mut commits: Vec<CapacityCommit> = Vec::with_capacity(days.len());
    let mut selected_slot: Option<&TimeSlot> = None;
    for (index, day) in days.iter().copied().enumerate() {
        let (commit, slot) = check_capacity(day, request.slot_id.as_ref(), request.quantity)?;
        if index == 0 {
            selected_slot = slot;
        }
        commits.push(commit);
    }

    // Ranges hold at least one night, so `days` is never empty here.
    let Some(primary) = days.first().copied() else {
        return Err(BookingError::MissingDates);
    };

    let unit_price: Decimal = selected_slot.map_or(primary.base_price, |slot| slot.price);
    let nights: Option<u32> = range.as_ref().map(|range| range.nights);
    let base_price: Decimal = unit_price
        * Decimal::from(request.quantity)
        * Decimal::from(nights.unwrap_or(1));
    let fees: Option<FeeBreakdown> = range.as_ref().map(|range| {
        compute_fees(&FeeInputs::from_settings(
            settings,
            range.check_in,
            range.check_out,
            range.check_in_time,
            range.check_out_time,
            primary.base_price,
        ))
    });
    let total_price: Decimal = base_price + fees.map_or(Decimal::ZERO, |fees| fees.total);

    Ok(Plan {
        primary,
        selected_slot,
        range,
        quote: PriceQuote {
            unit_price,
            nights,
            base_price,
            fees,
            total_price,
        },
        commits,
    })
}

/// Prices a request without producing a booking.
///
/// Runs the same validation as [`create_booking`], so a request that quotes
/// successfully would also book successfully against the same store.
///
/// # Errors
///
/// Returns the first `BookingError` the request fails on.
pub fn quote(
    store: &AvailabilityStore,
    settings: &BookingSettings,
    request: &BookingRequest,
) -> Result<PriceQuote, BookingError> {
    build_plan(store, settings, request).map(|plan| plan.quote)
}

/// Validates a request against the store and produces the booking and its
/// commit plan.
///
/// Validation order:
/// 1. Customer name and email are present, and quantity is at least one
/// 2. Range requests: range booking enabled, both dates present, minimum stay met
/// 3. Every occupied date has a record that is available
/// 4. Every occupied date has enough capacity: the selected slot when the
///    day is hourly and a slot is named, else the day itself
///
/// The unit price is the selected slot's price on the check-in date, else
/// that day's base price. Range bookings add check-in/out surcharges, and
/// the over-24h penalty is always priced at the check-in day's base price.
///
/// # Arguments
///
/// * `store` - The current availability snapshot (not modified)
/// * `settings` - Operator settings
/// * `request` - The customer's request
/// * `now` - Creation timestamp for the booking
///
/// # Errors
///
/// Returns the first `BookingError` the request fails on.
pub fn create_booking(
    store: &AvailabilityStore,
    settings: &BookingSettings,
    request: &BookingRequest,
    now: OffsetDateTime,
) -> Result<BookingOutcome, BookingError> {
    let plan: Plan<'_> = build_plan(store, settings, request).inspect_err(|error| {
        debug!(%error, date = %request.date, "Booking request rejected");
    })?;

    let stay: Stay = plan.range.as_ref().map_or(Stay::SingleDay, |range| {
        Stay::Range(RangeStay {
            check_in: range.check_in,
            check_out: range.check_out,
            nights: range.nights,
            check_in_time: range.check_in_time,
            check_out_time: range.check_out_time,
            early_check_in_requested: range.early_check_in_requested,
            late_check_out_requested: range.late_check_out_requested,
            fees: plan.quote.fees.unwrap_or_default(),
        })
    });

    let slot: Option<SlotWindow> = plan.selected_slot.map(|slot| SlotWindow {
        slot_id: Some(slot.id.clone()),
        start_time: slot.start_time,
        end_time: Some(slot.end_time),
    });

    let booking: Booking = Booking {
        id: BookingId::new(&format!("booking-{}", Ulid::new())),
        date: plan.primary.date,
        stay,
        slot,
        quantity: request.quantity,
        total_price: plan.quote.total_price,
        customer: request.customer.clone(),
        status: BookingStatus::Confirmed,
        imported: false,
        created_at: now,
        updated_at: now,
    };

    info!(
        booking_id = %booking.id,
        date = %booking.date,
        nights = plan.quote.nights.unwrap_or(0),
        total_price = %booking.total_price,
        "Booking accepted"
    );

    Ok(BookingOutcome {
        booking,
        commits: plan.commits,
    })
}

/// Applies a commit plan to a copy of the store.
///
/// Either every commit succeeds and the updated store is returned, or the
/// first failure is returned and no store is produced.
///
/// # Errors
///
/// Returns the `DomainError` of the first commit that does not fit.
pub fn apply_commits(
    store: &AvailabilityStore,
    commits: &[CapacityCommit],
) -> Result<AvailabilityStore, DomainError> {
    let mut updated: AvailabilityStore = store.clone();
    for commit in commits {
        updated.commit(commit.date, commit.slot_id.as_ref(), commit.quantity)?;
    }
    Ok(updated)
}
