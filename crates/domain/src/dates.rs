// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar and clock arithmetic.
//!
//! All dates are timezone-naive calendar dates and all times are wall-clock
//! times within a day.

use crate::error::DomainError;
use std::iter::FusedIterator;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, PrimitiveDateTime, Time};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const CLOCK: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");
const DISPLAY_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[weekday], [month repr:long] [day padding:none], [year]");

pub(crate) const MINUTES_PER_DAY: u32 = 24 * 60;

/// 23:59, the latest clock time a slot can end at.
const LAST_CLOCK_MINUTE: u32 = MINUTES_PER_DAY - 1;

/// Returns the number of nights between check-in and check-out.
///
/// Equal dates yield zero nights, and so does a check-out before the
/// check-in. Callers reject both through the minimum-stay rule.
#[must_use]
pub fn nights_between(check_in: Date, check_out: Date) -> u32 {
    let days: i64 = (check_out - check_in).whole_days();
    if days <= 0 {
        return 0;
    }
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// A finite, restartable walk over consecutive calendar dates.
///
/// Produced by [`date_range`] (end exclusive) and [`inclusive_date_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
    include_end: bool,
}

impl DateRange {
    fn contains(&self, date: Date) -> bool {
        date < self.end || (self.include_end && date == self.end)
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current: Date = self.next.filter(|date| self.contains(*date))?;
        self.next = current.next_day();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(current) = self.next.filter(|date| self.contains(*date)) else {
            return (0, Some(0));
        };
        let mut remaining: i64 = (self.end - current).whole_days();
        if self.include_end {
            remaining += 1;
        }
        let remaining: usize = usize::try_from(remaining).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl FusedIterator for DateRange {}

/// Returns every date in `[start, end)`.
///
/// A range whose end is not after its start is empty.
#[must_use]
pub const fn date_range(start: Date, end: Date) -> DateRange {
    DateRange {
        next: Some(start),
        end,
        include_end: false,
    }
}

/// Returns every date in `[start, end]`.
///
/// A range whose end is before its start is empty.
#[must_use]
pub const fn inclusive_date_range(start: Date, end: Date) -> DateRange {
    DateRange {
        next: Some(start),
        end,
        include_end: true,
    }
}

/// Minutes elapsed since midnight for a clock time.
#[must_use]
pub fn clock_minutes(time: Time) -> u32 {
    u32::from(time.hour()) * 60 + u32::from(time.minute())
}

fn clock_from_minutes(minutes: u32) -> Time {
    Time::MIDNIGHT + Duration::minutes(i64::from(minutes % MINUTES_PER_DAY))
}

/// Generates the `(start, end)` pairs for a working day split into slots.
///
/// Slot starts step from `start` by `duration_minutes` while they are before
/// `end`. Each slot ends `duration_minutes` after its start, so the final slot
/// may run past `end`, but never past 23:59. A zero duration yields no slots.
///
/// # Arguments
///
/// * `start` - Opening time (first slot start)
/// * `end` - Closing time (exclusive bound on slot starts)
/// * `duration_minutes` - Length of each slot
#[must_use]
pub fn generate_slots(start: Time, end: Time, duration_minutes: u32) -> Vec<(Time, Time)> {
    if duration_minutes == 0 {
        return Vec::new();
    }

    let end_minutes: u32 = clock_minutes(end);
    let mut current: u32 = clock_minutes(start);
    let mut slots: Vec<(Time, Time)> = Vec::new();

    while current < end_minutes {
        let slot_end: u32 = current
            .saturating_add(duration_minutes)
            .min(LAST_CLOCK_MINUTE);
        slots.push((clock_from_minutes(current), clock_from_minutes(slot_end)));
        current = current.saturating_add(duration_minutes);
    }

    slots
}

/// Returns whether clock time `a` is strictly earlier than `b`.
#[must_use]
pub fn is_earlier_clock(a: Time, b: Time) -> bool {
    clock_minutes(a) < clock_minutes(b)
}

/// Returns whether clock time `a` is strictly later than `b`.
#[must_use]
pub fn is_later_clock(a: Time, b: Time) -> bool {
    clock_minutes(a) > clock_minutes(b)
}

/// Hours between a check-in instant and a check-out instant.
///
/// Returns `0.0` unless both clock times are present.
#[must_use]
pub fn stay_duration_hours(
    check_in_date: Date,
    check_in_time: Option<Time>,
    check_out_date: Date,
    check_out_time: Option<Time>,
) -> f64 {
    let (Some(check_in_time), Some(check_out_time)) = (check_in_time, check_out_time) else {
        return 0.0;
    };

    let check_in: PrimitiveDateTime = PrimitiveDateTime::new(check_in_date, check_in_time);
    let check_out: PrimitiveDateTime = PrimitiveDateTime::new(check_out_date, check_out_time);
    (check_out - check_in).as_seconds_f64() / 3600.0
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, ISO_DATE).map_err(|e| DomainError::DateParse {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses an `HH:MM` clock time.
///
/// # Errors
///
/// Returns `DomainError::TimeParse` if the string is not a valid time.
pub fn parse_clock(value: &str) -> Result<Time, DomainError> {
    Time::parse(value, CLOCK).map_err(|e| DomainError::TimeParse {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a clock time as `HH:MM`.
#[must_use]
pub fn format_clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Formats a date for people, e.g. `Saturday, June 1, 2024`.
#[must_use]
pub fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE).unwrap_or_else(|_| date.to_string())
}
