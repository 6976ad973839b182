// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors for calendar import.

use thiserror::Error;

/// A calendar event that could not be imported.
///
/// Every variant carries the 1-based position of the `VEVENT` block in the
/// file. A malformed event is skipped and the rest of the file still imports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedInterchangeRecord {
    /// The event has no `SUMMARY` line, or it is empty.
    #[error("Event {index} has no SUMMARY")]
    MissingSummary { index: usize },

    /// The event has no `DTSTART` line.
    #[error("Event {index} has no DTSTART")]
    MissingStart { index: usize },

    /// A date property could not be parsed.
    #[error("Event {index} has an invalid {field} value '{value}'")]
    InvalidDate {
        index: usize,
        field: &'static str,
        value: String,
    },

    /// The file ended, or a new event began, before `END:VEVENT`.
    #[error("Event {index} is not terminated by END:VEVENT")]
    UnterminatedEvent { index: usize },
}

impl MalformedInterchangeRecord {
    /// The 1-based position of the offending event.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::MissingSummary { index }
            | Self::MissingStart { index }
            | Self::InvalidDate { index, .. }
            | Self::UnterminatedEvent { index } => *index,
        }
    }
}
