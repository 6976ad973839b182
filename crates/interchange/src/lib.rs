// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar interchange for bookings.
//!
//! Bookings are exported as iCalendar `VEVENT` blocks and calendar files
//! are imported back as simple single-day bookings. The conversion is lossy
//! in the import direction: ranges, prices and quantities are not rebuilt.

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

mod convert;
mod error;
mod event;
mod ics;

#[cfg(test)]
mod tests;

pub use convert::{
    ImportedBookings, booking_to_event, event_to_booking, export_bookings, import_bookings,
};
pub use error::MalformedInterchangeRecord;
pub use event::CalendarEvent;
pub use ics::{ImportReport, parse_calendar, write_calendar};
