// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Time};

/// One calendar entry as exchanged with other calendar tools.
///
/// The end date is inclusive of the stay's last day for single-day events
/// and is the check-out date for ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Short title.
    pub summary: String,
    /// Free-text body.
    pub description: Option<String>,
    /// First date of the event.
    pub start_date: Date,
    /// Last date of the event.
    pub end_date: Date,
    /// Start time, for timed events.
    pub start_time: Option<Time>,
    /// End time, for timed events.
    pub end_time: Option<Time>,
    /// Whether the event is written as date-only.
    pub all_day: bool,
    /// Where the event takes place.
    pub location: Option<String>,
}

impl CalendarEvent {
    /// Creates an all-day event on a single date.
    #[must_use]
    pub const fn all_day(summary: String, date: Date) -> Self {
        Self {
            summary,
            description: None,
            start_date: date,
            end_date: date,
            start_time: None,
            end_time: None,
            all_day: true,
            location: None,
        }
    }
}
