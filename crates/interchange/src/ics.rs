// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! iCalendar text reading and writing.
//!
//! Only the subset of RFC 5545 used for bookings is handled: `VEVENT`
//! blocks with date or date-time starts and ends, a summary, a description
//! and a location. Unknown properties and parameters are ignored on read.

use crate::error::MalformedInterchangeRecord;
use crate::event::CalendarEvent;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};
use tracing::warn;
use ulid::Ulid;

const PRODUCT_ID: &str = "-//Booking Engine//EN";
const UID_DOMAIN: &str = "bookingengine.com";
const LINE_LIMIT: usize = 75;

const ICS_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year][month][day]");
const ICS_DATE_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year][month][day]T[hour][minute][second]");

/// The outcome of reading a calendar file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Events that were read successfully, in file order.
    pub events: Vec<CalendarEvent>,
    /// Events that were skipped.
    pub rejected: Vec<MalformedInterchangeRecord>,
}

impl ImportReport {
    /// Returns `true` if no event was skipped.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    fn reject(&mut self, record: MalformedInterchangeRecord) {
        warn!(index = record.index(), %record, "Skipping malformed calendar event");
        self.rejected.push(record);
    }
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn format_date_time(date: Date, time: Time) -> String {
    format!(
        "{}T{:02}{:02}{:02}",
        format_date(date),
        time.hour(),
        time.minute(),
        time.second()
    )
}

fn date_property(name: &str, date: Date, time: Option<Time>, all_day: bool) -> String {
    if all_day {
        format!("{name};VALUE=DATE:{}", format_date(date))
    } else {
        format!(
            "{name}:{}",
            format_date_time(date, time.unwrap_or(Time::MIDNIGHT))
        )
    }
}

fn escape_text(value: &str) -> String {
    let mut escaped: String = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn unescape_text(value: &str) -> String {
    let mut unescaped: String = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            unescaped.push(ch);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => unescaped.push('\n'),
            Some(other) => unescaped.push(other),
            None => unescaped.push('\\'),
        }
    }
    unescaped
}

/// Splits a content line so no physical line exceeds 75 octets.
fn fold_line(line: &str) -> String {
    if line.len() <= LINE_LIMIT {
        return line.to_string();
    }

    let mut folded: String = String::with_capacity(line.len() + line.len() / LINE_LIMIT * 3);
    let mut width: usize = 0;
    for ch in line.chars() {
        if width + ch.len_utf8() > LINE_LIMIT {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(ch);
        width += ch.len_utf8();
    }
    folded
}

/// Joins folded continuation lines back onto the line they continue.
fn unfold(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.lines() {
        match (raw.strip_prefix([' ', '\t']), lines.last_mut()) {
            (Some(continuation), Some(last)) => last.push_str(continuation),
            _ => lines.push(raw.to_string()),
        }
    }
    lines
}

/// Writes events as an iCalendar document with CRLF line endings.
///
/// Each event gets a fresh `UID`. `DTSTAMP` is `now` in UTC.
///
/// # Arguments
///
/// * `events` - The events to write
/// * `now` - The export time
#[must_use]
pub fn write_calendar(events: &[CalendarEvent], now: OffsetDateTime) -> String {
    let utc: OffsetDateTime = now.to_offset(UtcOffset::UTC);
    let stamp: String = format!("{}Z", format_date_time(utc.date(), utc.time()));

    let mut lines: Vec<String> = vec![
        String::from("BEGIN:VCALENDAR"),
        String::from("VERSION:2.0"),
        format!("PRODID:{PRODUCT_ID}"),
        String::from("CALSCALE:GREGORIAN"),
        String::from("METHOD:PUBLISH"),
    ];

    for event in events {
        lines.push(String::from("BEGIN:VEVENT"));
        lines.push(date_property(
            "DTSTART",
            event.start_date,
            event.start_time,
            event.all_day,
        ));
        // A timed event without an end time ends when it starts
        lines.push(date_property(
            "DTEND",
            event.end_date,
            event.end_time.or(event.start_time),
            event.all_day,
        ));
        lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
        if let Some(description) = &event.description {
            lines.push(format!("DESCRIPTION:{}", escape_text(description)));
        }
        if let Some(location) = &event.location {
            lines.push(format!("LOCATION:{}", escape_text(location)));
        }
        lines.push(format!("UID:{}@{UID_DOMAIN}", Ulid::new()));
        lines.push(format!("DTSTAMP:{stamp}"));
        lines.push(String::from("END:VEVENT"));
    }
    lines.push(String::from("END:VCALENDAR"));

    let mut document: String = String::new();
    for line in &lines {
        document.push_str(&fold_line(line));
        document.push_str("\r\n");
    }
    document
}

/// Parses a `DATE` or `DATE-TIME` value. A trailing `Z` is accepted and the
/// time is kept as wall-clock time.
fn parse_date_value(value: &str) -> Option<(Date, Option<Time>)> {
    let value: &str = value.trim().trim_end_matches('Z');
    if value.len() == 8 {
        return Date::parse(value, ICS_DATE).ok().map(|date| (date, None));
    }
    PrimitiveDateTime::parse(value, ICS_DATE_TIME)
        .ok()
        .map(|date_time| (date_time.date(), Some(date_time.time())))
}

#[derive(Default)]
struct EventDraft {
    index: usize,
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

impl EventDraft {
    fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    fn read_property(&mut self, line: &str) {
        let Some((name, value)) = line.split_once(':') else {
            return;
        };
        // Parameters such as `;VALUE=DATE` follow the property name
        let name: &str = name.split(';').next().unwrap_or(name).trim();

        match name.to_ascii_uppercase().as_str() {
            "SUMMARY" => self.summary = Some(unescape_text(value)),
            "DESCRIPTION" => self.description = Some(unescape_text(value)),
            "LOCATION" => self.location = Some(unescape_text(value)),
            "DTSTART" => self.start = Some(value.to_string()),
            "DTEND" => self.end = Some(value.to_string()),
            _ => {}
        }
    }

    fn finish(self) -> Result<CalendarEvent, MalformedInterchangeRecord> {
        let index: usize = self.index;
        let summary: String = self
            .summary
            .map(|summary| summary.trim().to_string())
            .filter(|summary| !summary.is_empty())
            .ok_or(MalformedInterchangeRecord::MissingSummary { index })?;

        let start: String = self
            .start
            .ok_or(MalformedInterchangeRecord::MissingStart { index })?;
        let (start_date, start_time) = parse_date_value(&start).ok_or_else(|| {
            MalformedInterchangeRecord::InvalidDate {
                index,
                field: "DTSTART",
                value: start.clone(),
            }
        })?;

        let (end_date, end_time) = match self.end {
            None => (start_date, None),
            Some(end) => parse_date_value(&end).ok_or(
                MalformedInterchangeRecord::InvalidDate {
                    index,
                    field: "DTEND",
                    value: end,
                },
            )?,
        };

        Ok(CalendarEvent {
            summary,
            description: self.description,
            start_date,
            end_date,
            start_time,
            end_time,
            all_day: start_time.is_none(),
            location: self.location,
        })
    }
}

/// Reads the events of an iCalendar document.
///
/// Unknown lines, properties and parameters are ignored. An event without a
/// summary or without a parseable `DTSTART` is skipped and reported, and the
/// remaining events are still read.
///
/// # Arguments
///
/// * `text` - The document, with LF or CRLF line endings
///
/// # Returns
///
/// The events that were read and the records of those that were skipped.
#[must_use]
pub fn parse_calendar(text: &str) -> ImportReport {
    let mut report: ImportReport = ImportReport::default();
    let mut current: Option<EventDraft> = None;
    let mut index: usize = 0;

    for line in unfold(text) {
        let line: &str = line.trim();
        if line.eq_ignore_ascii_case("BEGIN:VEVENT") {
            if let Some(open) = current.take() {
                report.reject(MalformedInterchangeRecord::UnterminatedEvent { index: open.index });
            }
            index += 1;
            current = Some(EventDraft::new(index));
        } else if line.eq_ignore_ascii_case("END:VEVENT") {
            if let Some(draft) = current.take() {
                match draft.finish() {
                    Ok(event) => report.events.push(event),
                    Err(record) => report.reject(record),
                }
            }
        } else if let Some(draft) = current.as_mut() {
            draft.read_property(line);
        }
    }

    if let Some(open) = current {
        report.reject(MalformedInterchangeRecord::UnterminatedEvent { index: open.index });
    }

    report
}
