// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod booking;
mod dates;
mod day;
mod error;
mod fees;
mod ledger;
mod settings;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Wire formats shared by every serialized date and clock field.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock, Time, "[hour]:[minute]");

pub use availability::{AvailabilityStore, BulkUpdate, HourlyUpdate};
pub use booking::{Booking, RangeStay, SlotWindow, Stay};
pub use dates::{
    DateRange, clock_minutes, date_range, format_clock, format_display_date, generate_slots,
    inclusive_date_range, is_earlier_clock, is_later_clock, nights_between, parse_clock,
    parse_iso_date, stay_duration_hours,
};
pub use day::{DayAvailability, DayMode, TimeSlot};
pub use error::DomainError;
pub use fees::{FeeBreakdown, FeeInputs, compute_fees};
pub use ledger::BookingLedger;
pub use settings::{BookingSettings, WorkingHours};
pub use types::{BookingId, BookingStatus, CustomerInfo, SlotId};
pub use validation::{validate_customer_info, validate_quantity};
