// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use booking_domain::{CustomerInfo, SlotId};
use serde::{Deserialize, Serialize};
use time::{Date, Time};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock, Time, "[hour]:[minute]");

/// What the customer asked for, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StayRequest {
    /// Book the request's date only.
    SingleDay,
    /// Book every night in `[check_in, check_out)`.
    #[serde(rename_all = "camelCase")]
    Range {
        /// First night.
        #[serde(default, with = "iso_date::option")]
        check_in: Option<Date>,
        /// Departure day.
        #[serde(default, with = "iso_date::option")]
        check_out: Option<Date>,
        /// Requested arrival time.
        #[serde(default, with = "clock::option")]
        check_in_time: Option<Time>,
        /// Requested departure time.
        #[serde(default, with = "clock::option")]
        check_out_time: Option<Time>,
        /// Informational: the customer asked to arrive early.
        #[serde(default)]
        early_check_in_requested: bool,
        /// Informational: the customer asked to leave late.
        #[serde(default)]
        late_check_out_requested: bool,
    },
}

/// A booking request as built by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// The date to book. Range requests use their check-in date instead.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Single day or range of nights.
    pub stay: StayRequest,
    /// The chosen slot, required when a booked day is hourly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<SlotId>,
    /// Units to book.
    pub quantity: u32,
    /// Contact details.
    pub customer: CustomerInfo,
}

impl BookingRequest {
    /// Creates a single-day request without a slot.
    ///
    /// # Arguments
    ///
    /// * `date` - The date to book
    /// * `quantity` - Units to book
    /// * `customer` - Contact details
    #[must_use]
    pub const fn single_day(date: Date, quantity: u32, customer: CustomerInfo) -> Self {
        Self {
            date,
            stay: StayRequest::SingleDay,
            slot_id: None,
            quantity,
            customer,
        }
    }

    /// Creates a range request without times.
    ///
    /// # Arguments
    ///
    /// * `check_in` - First night
    /// * `check_out` - Departure day
    /// * `quantity` - Units to book
    /// * `customer` - Contact details
    #[must_use]
    pub const fn range(
        check_in: Date,
        check_out: Date,
        quantity: u32,
        customer: CustomerInfo,
    ) -> Self {
        Self {
            date: check_in,
            stay: StayRequest::Range {
                check_in: Some(check_in),
                check_out: Some(check_out),
                check_in_time: None,
                check_out_time: None,
                early_check_in_requested: false,
                late_check_out_requested: false,
            },
            slot_id: None,
            quantity,
            customer,
        }
    }

    /// Returns the request with a slot selected.
    #[must_use]
    pub fn with_slot(self, slot_id: SlotId) -> Self {
        Self {
            slot_id: Some(slot_id),
            ..self
        }
    }
}
