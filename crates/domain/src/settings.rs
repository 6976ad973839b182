// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Time;
use time::macros::time;

/// Opening hours used to generate default slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// First slot start.
    #[serde(with = "crate::clock")]
    pub start: Time,
    /// Exclusive bound on slot starts.
    #[serde(with = "crate::clock")]
    pub end: Time,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: time!(09:00),
            end: time!(17:00),
        }
    }
}

/// Operator configuration for the booking engine.
///
/// Settings are supplied by the caller and passed explicitly to every entry
/// point. Missing fields in a stored snapshot fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct BookingSettings {
    /// Display name, also used as the calendar event location.
    pub business_name: String,
    /// Base price for newly created day records.
    pub default_price: Decimal,
    /// Capacity for newly created day records and slots.
    pub default_quantity: u32,
    /// Whether newly created day records start in hourly mode.
    pub use_hourly_booking: bool,
    /// Whether multi-night range bookings are accepted.
    pub allow_range_booking: bool,
    /// Minimum nights for a range booking. Values below 1 act as 1.
    pub minimum_nights: u32,
    /// Opening hours for generated slots.
    pub working_hours: WorkingHours,
    /// Length of generated slots in minutes.
    #[serde(rename = "slotDuration")]
    pub slot_duration_minutes: u32,
    /// How many days ahead day records are kept initialized.
    pub advance_booking_days: u32,
    /// Informational label only. Date arithmetic is timezone-naive.
    pub timezone: String,
    /// Standard check-in time for range bookings.
    #[serde(
        with = "crate::clock::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_check_in_time: Option<Time>,
    /// Standard check-out time for range bookings.
    #[serde(
        with = "crate::clock::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_check_out_time: Option<Time>,
    /// Whether requested times are compared to the standard times for fees.
    pub enforce_check_in_out_times: bool,
    /// Surcharge for checking in before the standard time.
    pub early_check_in_fee: Decimal,
    /// Surcharge for checking out after the standard time.
    pub late_check_out_fee: Decimal,
    /// Whether the early check-in surcharge applies.
    pub enable_early_check_in_fee: bool,
    /// Whether the late check-out surcharge applies.
    pub enable_late_check_out_fee: bool,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            business_name: String::from("My Booking Business"),
            default_price: Decimal::from(100),
            default_quantity: 10,
            use_hourly_booking: false,
            allow_range_booking: true,
            minimum_nights: 1,
            working_hours: WorkingHours::default(),
            slot_duration_minutes: 60,
            advance_booking_days: 90,
            timezone: String::from("UTC"),
            default_check_in_time: None,
            default_check_out_time: None,
            enforce_check_in_out_times: false,
            early_check_in_fee: Decimal::ZERO,
            late_check_out_fee: Decimal::ZERO,
            enable_early_check_in_fee: false,
            enable_late_check_out_fee: false,
        }
    }
}

impl BookingSettings {
    /// The effective minimum stay for range bookings.
    #[must_use]
    pub fn effective_minimum_nights(&self) -> u32 {
        self.minimum_nights.max(1)
    }

    /// Validates the settings for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSettings` if:
    /// - The slot duration is zero or longer than a day
    /// - Working hours do not start before they end
    /// - Any price or fee is negative
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.slot_duration_minutes == 0 {
            return Err(DomainError::InvalidSettings {
                reason: String::from("slot duration must be greater than 0"),
            });
        }

        if self.slot_duration_minutes > crate::dates::MINUTES_PER_DAY {
            return Err(DomainError::InvalidSettings {
                reason: format!(
                    "slot duration of {} minutes is longer than a day",
                    self.slot_duration_minutes
                ),
            });
        }

        if self.working_hours.start >= self.working_hours.end {
            return Err(DomainError::InvalidSettings {
                reason: format!(
                    "working hours start {} must be before end {}",
                    crate::dates::format_clock(self.working_hours.start),
                    crate::dates::format_clock(self.working_hours.end)
                ),
            });
        }

        let amounts: [(&str, Decimal); 3] = [
            ("default price", self.default_price),
            ("early check-in fee", self.early_check_in_fee),
            ("late check-out fee", self.late_check_out_fee),
        ];
        if let Some((name, _)) = amounts.iter().find(|(_, amount)| *amount < Decimal::ZERO) {
            return Err(DomainError::InvalidSettings {
                reason: format!("{name} must not be negative"),
            });
        }

        Ok(())
    }
}
