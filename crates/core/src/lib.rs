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

mod apply;
mod command;
pub mod engine;
mod error;
mod request;
pub mod snapshot;
mod state;

#[cfg(test)]
mod tests;

use booking_domain::{AvailabilityStore, DayAvailability, DomainError};
use time::Date;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use engine::{BookingOutcome, CapacityCommit, PriceQuote, apply_commits, create_booking, quote};
pub use error::{BookingError, CoreError};
pub use request::{BookingRequest, StayRequest};
pub use state::{Change, State, StateSummary, TransitionResult};

/// Looks up the record for a date, failing if it is missing.
///
/// This is a read-only lookup used by the day editor before it opens a day.
///
/// # Arguments
///
/// * `store` - The availability snapshot to search
/// * `date` - The date to look up
///
/// # Returns
///
/// * `Ok(&DayAvailability)` if the date has a record
/// * `Err(DomainError::DayNotFound)` if it does not
///
/// # Errors
///
/// Returns an error if the date has no record.
pub fn require_day(
    store: &AvailabilityStore,
    date: Date,
) -> Result<&DayAvailability, DomainError> {
    store.get(date).ok_or(DomainError::DayNotFound(date))
}
