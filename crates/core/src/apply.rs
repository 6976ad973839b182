// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::engine::{BookingOutcome, CapacityCommit, apply_commits, create_booking};
use crate::error::CoreError;
use crate::state::{Change, State, StateSummary, TransitionResult};
use booking_domain::{
    AvailabilityStore, Booking, BookingLedger, BookingSettings, BookingStatus, DomainError, SlotId,
};
use time::OffsetDateTime;
use tracing::info;

/// Rebuilds the capacity a booking holds against the current store.
///
/// A date commits against the booked slot when that date is hourly and the
/// slot still exists, and against the day otherwise. Imported bookings hold
/// nothing.
fn held_capacity(store: &AvailabilityStore, booking: &Booking) -> Vec<CapacityCommit> {
    if !booking.holds_inventory() {
        return Vec::new();
    }
    booking
        .occupied_dates()
        .into_iter()
        .map(|date| {
            let slot_id: Option<SlotId> = booking
                .slot_id()
                .filter(|slot_id| {
                    store
                        .get(date)
                        .is_some_and(|day| day.slot(slot_id).is_some())
                })
                .cloned();
            CapacityCommit {
                date,
                slot_id,
                quantity: booking.quantity,
            }
        })
        .collect()
}

/// Applies a command to the current state, producing a new state and a change record.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `settings` - Operator settings
/// * `command` - The command to apply
/// * `now` - The time of the transition
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and change record
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A booking request is rejected
/// - The booking whose status should change does not exist
/// - Re-activating a cancelled booking would exceed capacity
/// - The booking window extends past the last representable date
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &State,
    settings: &BookingSettings,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    // Capture state before transition
    let before: StateSummary = state.summary();

    let (new_state, change): (State, Change) = match command {
        Command::CreateBooking(request) => {
            let outcome: BookingOutcome =
                create_booking(&state.availability, settings, &request, now)?;

            // Commit capacity on a copy; a failed commit leaves no partial state
            let availability: AvailabilityStore =
                apply_commits(&state.availability, &outcome.commits)?;

            let mut ledger: BookingLedger = state.ledger.clone();
            let change: Change = Change::BookingCreated {
                booking_id: outcome.booking.id.clone(),
                dates: outcome.commits.len(),
            };
            ledger.append(outcome.booking);

            (State::from_parts(availability, ledger), change)
        }
        Command::SaveDay(day) => {
            let date: time::Date = day.date;
            let mut availability: AvailabilityStore = state.availability.clone();
            availability.upsert_day(day);

            (
                State::from_parts(availability, state.ledger.clone()),
                Change::DaySaved { date },
            )
        }
        Command::BulkUpdate { start, end, update } => {
            let mut availability: AvailabilityStore = state.availability.clone();
            let days: usize = availability.apply_bulk_update(start, end, &update, settings);
            info!(%start, %end, days, "Bulk availability update applied");

            (
                State::from_parts(availability, state.ledger.clone()),
                Change::BulkUpdated { start, end, days },
            )
        }
        Command::EnsureWindow { today } => {
            let mut availability: AvailabilityStore = state.availability.clone();
            let created: usize =
                availability.ensure_window(today, settings.advance_booking_days, settings)?;
            if created > 0 {
                info!(%today, created, "Booking window extended");
            }

            (
                State::from_parts(availability, state.ledger.clone()),
                Change::WindowExtended { created },
            )
        }
        Command::SetBookingStatus { id, status } => {
            let booking: &Booking = state
                .ledger
                .get(&id)
                .ok_or_else(|| DomainError::BookingNotFound(id.clone()))?;
            let from: BookingStatus = booking.status;

            // Only crossing the cancelled boundary touches capacity
            let held: Vec<CapacityCommit> = held_capacity(&state.availability, booking);
            let availability: AvailabilityStore =
                match (from.holds_capacity(), status.holds_capacity()) {
                    (true, false) => {
                        let mut availability: AvailabilityStore = state.availability.clone();
                        for commit in &held {
                            availability.release(
                                commit.date,
                                commit.slot_id.as_ref(),
                                commit.quantity,
                            );
                        }
                        availability
                    }
                    (false, true) => apply_commits(&state.availability, &held)?,
                    _ => state.availability.clone(),
                };

            let mut ledger: BookingLedger = state.ledger.clone();
            ledger.set_status(&id, status, now)?;
            info!(booking_id = %id, %from, to = %status, "Booking status changed");

            (
                State::from_parts(availability, ledger),
                Change::StatusChanged {
                    booking_id: id,
                    from,
                    to: status,
                },
            )
        }
        Command::ImportBookings(bookings) => {
            let count: usize = bookings.len();
            let mut ledger: BookingLedger = state.ledger.clone();
            ledger.extend(bookings.into_iter().map(|booking| Booking {
                imported: true,
                ..booking
            }));
            info!(count, "Bookings imported");

            (
                State::from_parts(state.availability.clone(), ledger),
                Change::BookingsImported { count },
            )
        }
    };

    // Capture state after transition
    let after: StateSummary = new_state.summary();

    Ok(TransitionResult {
        new_state,
        change,
        before,
        after,
    })
}
