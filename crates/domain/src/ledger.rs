// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::Booking;
use crate::error::DomainError;
use crate::types::{BookingId, BookingStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// All recorded bookings in insertion order.
///
/// Bookings are only ever appended. The status of an existing booking may
/// change; nothing else does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    /// Creates a ledger holding the given bookings in order.
    #[must_use]
    pub const fn from_bookings(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    /// Returns the bookings in insertion order.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Consumes the ledger, returning the bookings in insertion order.
    #[must_use]
    pub fn into_bookings(self) -> Vec<Booking> {
        self.bookings
    }

    /// Number of recorded bookings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Returns whether no bookings are recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Records a new booking.
    pub fn append(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Records several bookings in order.
    pub fn extend(&mut self, bookings: impl IntoIterator<Item = Booking>) {
        self.bookings.extend(bookings);
    }

    /// Finds a booking by identifier.
    #[must_use]
    pub fn get(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|booking| &booking.id == id)
    }

    /// Changes the status of a booking, stamping `updated_at` with `now`.
    ///
    /// # Returns
    ///
    /// The booking as it was before the change.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BookingNotFound` if no booking has this id.
    pub fn set_status(
        &mut self,
        id: &BookingId,
        status: BookingStatus,
        now: OffsetDateTime,
    ) -> Result<Booking, DomainError> {
        let booking: &mut Booking = self
            .bookings
            .iter_mut()
            .find(|booking| &booking.id == id)
            .ok_or_else(|| DomainError::BookingNotFound(id.clone()))?;
        let previous: Booking = booking.clone();
        *booking = previous.clone().transition_status(status, now);
        Ok(previous)
    }

    /// Sum of `total_price` over every booking.
    ///
    /// Cancelled bookings are included.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.bookings.iter().map(|booking| booking.total_price).sum()
    }

    /// Sum of booked units over every booking.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.bookings
            .iter()
            .map(|booking| u64::from(booking.quantity))
            .sum()
    }

    /// Bookings whose primary date is `date`.
    pub fn bookings_for_date(&self, date: Date) -> impl Iterator<Item = &Booking> {
        self.bookings
            .iter()
            .filter(move |booking| booking.date == date)
    }

    /// Number of bookings whose primary date is `date`.
    #[must_use]
    pub fn count_for_date(&self, date: Date) -> usize {
        self.bookings_for_date(date).count()
    }

    /// Revenue from bookings whose primary date is `date`.
    #[must_use]
    pub fn revenue_for_date(&self, date: Date) -> Decimal {
        self.bookings_for_date(date)
            .map(|booking| booking.total_price)
            .sum()
    }

    /// Bookings ordered newest first by creation time.
    #[must_use]
    pub fn sorted_for_display(&self) -> Vec<&Booking> {
        let mut sorted: Vec<&Booking> = self.bookings.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }
}
