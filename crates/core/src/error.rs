// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use booking_domain::{DomainError, SlotId};
use time::Date;

/// Reasons a booking request is rejected.
///
/// Validation is fail-fast, so a rejected request carries exactly one reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A required customer field is blank.
    InvalidCustomerInfo {
        /// The offending field (`name` or `email`).
        field: &'static str,
    },
    /// The requested quantity is zero.
    InvalidQuantity {
        /// The rejected quantity.
        quantity: u32,
    },
    /// Range bookings are turned off in the settings.
    RangeBookingDisabled,
    /// A range request is missing its check-in or check-out date.
    MissingDates,
    /// The stay is shorter than the configured minimum.
    BelowMinimumStay {
        /// Nights requested.
        nights: u32,
        /// Nights required.
        minimum: u32,
    },
    /// An occupied date has no record or is marked unavailable.
    DateUnavailable {
        /// The first offending date.
        date: Date,
    },
    /// Not enough capacity remains on a date or slot.
    InsufficientCapacity {
        /// The first offending date.
        date: Date,
        /// Units requested.
        requested: u32,
        /// Units remaining.
        remaining: u32,
    },
    /// The slot named for an hourly day is missing or closed.
    SlotUnavailable {
        /// The first offending date.
        date: Date,
        /// The requested slot.
        slot_id: SlotId,
    },
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCustomerInfo { field } => {
                write!(f, "Customer {field} is required")
            }
            Self::InvalidQuantity { quantity } => {
                write!(f, "Invalid quantity: {quantity}. Must be at least 1")
            }
            Self::RangeBookingDisabled => write!(f, "Range bookings are not enabled"),
            Self::MissingDates => {
                write!(f, "Range bookings need both a check-in and a check-out date")
            }
            Self::BelowMinimumStay { nights, minimum } => {
                write!(
                    f,
                    "Stay of {nights} night(s) is below the minimum of {minimum}"
                )
            }
            Self::DateUnavailable { date } => write!(f, "{date} is not available"),
            Self::InsufficientCapacity {
                date,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Only {remaining} remaining on {date}, {requested} requested"
                )
            }
            Self::SlotUnavailable { date, slot_id } => {
                write!(f, "Slot '{slot_id}' is not available on {date}")
            }
        }
    }
}

impl std::error::Error for BookingError {}

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A booking request was rejected.
    BookingRejected(BookingError),
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A snapshot could not be encoded or decoded.
    Snapshot {
        /// The serializer's error message.
        message: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookingRejected(err) => write!(f, "Booking rejected: {err}"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Snapshot { message } => write!(f, "Snapshot error: {message}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BookingRejected(err) => Some(err),
            Self::DomainViolation(err) => Some(err),
            Self::Snapshot { .. } => None,
        }
    }
}

impl From<BookingError> for CoreError {
    fn from(err: BookingError) -> Self {
        Self::BookingRejected(err)
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Snapshot {
            message: err.to_string(),
        }
    }
}
