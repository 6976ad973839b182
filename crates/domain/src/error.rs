// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BookingId, SlotId};
use time::Date;

/// Errors that can occur during domain validation and inventory updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required customer field is empty after trimming.
    InvalidCustomerInfo {
        /// The offending field (`name` or `email`).
        field: &'static str,
    },
    /// A booking quantity must be at least one.
    InvalidQuantity {
        /// The rejected quantity.
        quantity: u32,
    },
    /// Failed to parse a calendar date.
    DateParse {
        /// The invalid date string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a clock time.
    TimeParse {
        /// The invalid time string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Booking settings are internally inconsistent.
    InvalidSettings {
        /// Description of the inconsistency.
        reason: String,
    },
    /// No availability record exists for the date.
    DayNotFound(Date),
    /// The slot does not exist on the given day.
    SlotNotFound {
        /// The day that was searched.
        date: Date,
        /// The missing slot identifier.
        slot_id: SlotId,
    },
    /// A slot with this identifier already exists on the day.
    DuplicateSlot {
        /// The day being edited.
        date: Date,
        /// The conflicting slot identifier.
        slot_id: SlotId,
    },
    /// A commit would push booked quantity past the configured quantity.
    ///
    /// Callers are expected to validate capacity first, so this indicates a bug
    /// in the caller rather than a customer-facing condition.
    CapacityInvariant {
        /// The day being committed against.
        date: Date,
        /// The slot being committed against, if any.
        slot_id: Option<SlotId>,
        /// The quantity the caller attempted to commit.
        requested: u32,
        /// The quantity actually remaining.
        remaining: u32,
    },
    /// No booking with this identifier is recorded.
    BookingNotFound(BookingId),
    /// Booking status string is not recognized.
    InvalidBookingStatus(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCustomerInfo { field } => {
                write!(f, "Invalid customer info: {field} must not be empty")
            }
            Self::InvalidQuantity { quantity } => {
                write!(f, "Invalid quantity: {quantity}. Must be at least 1")
            }
            Self::DateParse { value, error } => {
                write!(f, "Failed to parse date '{value}': {error}")
            }
            Self::TimeParse { value, error } => {
                write!(f, "Failed to parse time '{value}': {error}")
            }
            Self::InvalidSettings { reason } => write!(f, "Invalid settings: {reason}"),
            Self::DayNotFound(date) => write!(f, "No availability record for {date}"),
            Self::SlotNotFound { date, slot_id } => {
                write!(f, "Slot '{slot_id}' not found on {date}")
            }
            Self::DuplicateSlot { date, slot_id } => {
                write!(f, "Slot '{slot_id}' already exists on {date}")
            }
            Self::CapacityInvariant {
                date,
                slot_id,
                requested,
                remaining,
            } => match slot_id {
                Some(slot_id) => write!(
                    f,
                    "Cannot commit {requested} on {date} slot '{slot_id}': only {remaining} remaining"
                ),
                None => write!(
                    f,
                    "Cannot commit {requested} on {date}: only {remaining} remaining"
                ),
            },
            Self::BookingNotFound(id) => write!(f, "Booking '{id}' not found"),
            Self::InvalidBookingStatus(value) => write!(f, "Invalid booking status: {value}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
