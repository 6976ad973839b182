// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use booking_domain::{AvailabilityStore, BookingId, BookingLedger, BookingStatus, DayAvailability};
use rust_decimal::Decimal;
use time::Date;

/// The complete booking state: inventory plus ledger.
///
/// State is a value. Transitions produce a new state and leave the old one
/// untouched, so the caller decides when to persist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    /// Per-date inventory.
    pub availability: AvailabilityStore,
    /// Every recorded booking.
    pub ledger: BookingLedger,
}

impl State {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            availability: AvailabilityStore::new(),
            ledger: BookingLedger::new(),
        }
    }

    /// Creates a state from loaded snapshots.
    ///
    /// # Arguments
    ///
    /// * `availability` - The inventory snapshot
    /// * `ledger` - The booking snapshot
    #[must_use]
    pub const fn from_parts(availability: AvailabilityStore, ledger: BookingLedger) -> Self {
        Self {
            availability,
            ledger,
        }
    }

    /// Summarizes the state for change records.
    #[must_use]
    pub fn summary(&self) -> StateSummary {
        let booked_units: u64 = self
            .availability
            .iter()
            .map(|day: &DayAvailability| {
                if day.is_hourly() {
                    day.slots()
                        .iter()
                        .map(|slot| u64::from(slot.booked_quantity))
                        .sum()
                } else {
                    u64::from(day.booked_quantity)
                }
            })
            .sum();

        StateSummary {
            days: self.availability.len(),
            bookings: self.ledger.len(),
            booked_units,
            revenue: self.ledger.total_revenue(),
        }
    }
}

/// Headline figures of a state, recorded before and after each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSummary {
    /// Number of day records.
    pub days: usize,
    /// Number of bookings in the ledger.
    pub bookings: usize,
    /// Units committed across all days and slots.
    pub booked_units: u64,
    /// Ledger revenue.
    pub revenue: Decimal,
}

impl std::fmt::Display for StateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "days={},bookings={},booked_units={},revenue={}",
            self.days, self.bookings, self.booked_units, self.revenue
        )
    }
}

/// What a transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A booking was accepted and its capacity committed.
    BookingCreated {
        /// The new booking.
        booking_id: BookingId,
        /// Number of dates committed.
        dates: usize,
    },
    /// A day record was saved from the day editor.
    DaySaved {
        /// The saved date.
        date: Date,
    },
    /// A bulk edit was applied.
    BulkUpdated {
        /// First date of the range.
        start: Date,
        /// Last date of the range.
        end: Date,
        /// Number of days updated.
        days: usize,
    },
    /// Missing day records were created for the booking window.
    WindowExtended {
        /// Number of records created.
        created: usize,
    },
    /// A booking's status changed.
    StatusChanged {
        /// The booking.
        booking_id: BookingId,
        /// Status before the change.
        from: BookingStatus,
        /// Status after the change.
        to: BookingStatus,
    },
    /// Bookings were imported from a calendar file.
    BookingsImported {
        /// Number of bookings appended.
        count: usize,
    },
}

impl Change {
    /// A stable name for the kind of change.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BookingCreated { .. } => "CreateBooking",
            Self::DaySaved { .. } => "SaveDay",
            Self::BulkUpdated { .. } => "BulkUpdate",
            Self::WindowExtended { .. } => "EnsureWindow",
            Self::StatusChanged { .. } => "SetBookingStatus",
            Self::BookingsImported { .. } => "ImportBookings",
        }
    }
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookingCreated { booking_id, dates } => {
                write!(f, "Created booking {booking_id} over {dates} date(s)")
            }
            Self::DaySaved { date } => write!(f, "Saved availability for {date}"),
            Self::BulkUpdated { start, end, days } => {
                write!(f, "Updated {days} day(s) from {start} to {end}")
            }
            Self::WindowExtended { created } => {
                write!(f, "Created {created} day record(s)")
            }
            Self::StatusChanged {
                booking_id,
                from,
                to,
            } => write!(f, "Booking {booking_id} changed from {from} to {to}"),
            Self::BookingsImported { count } => write!(f, "Imported {count} booking(s)"),
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What the transition did.
    pub change: Change,
    /// Summary of the state before the transition.
    pub before: StateSummary,
    /// Summary of the state after the transition.
    pub after: StateSummary,
}
