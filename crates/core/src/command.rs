// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request::BookingRequest;
use booking_domain::{Booking, BookingId, BookingStatus, BulkUpdate, DayAvailability};
use time::Date;

/// A command represents customer or operator intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate, price and record a booking request.
    CreateBooking(BookingRequest),
    /// Replace one day record with an edited copy.
    SaveDay(DayAvailability),
    /// Apply the same field changes to every date in `[start, end]`.
    BulkUpdate {
        /// First date.
        start: Date,
        /// Last date (inclusive).
        end: Date,
        /// The field changes.
        update: BulkUpdate,
    },
    /// Create missing day records from `today` through the advance booking window.
    EnsureWindow {
        /// First date of the window.
        today: Date,
    },
    /// Change the status of an existing booking.
    ///
    /// Cancelling releases capacity. Moving a cancelled booking back to
    /// pending or confirmed commits capacity again, if it is still there.
    SetBookingStatus {
        /// The booking to change.
        id: BookingId,
        /// The new status.
        status: BookingStatus,
    },
    /// Append bookings converted from a calendar file.
    ///
    /// Imported bookings do not touch capacity.
    ImportBookings(Vec<Booking>),
}
