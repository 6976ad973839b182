// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::date_range;
use crate::fees::FeeBreakdown;
use crate::types::{BookingId, BookingStatus, CustomerInfo, SlotId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};

/// The check-in/check-out details of a multi-night booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)]
pub struct RangeStay {
    /// First occupied night.
    #[serde(with = "crate::iso_date")]
    pub check_in: Date,
    /// Departure day (not occupied).
    #[serde(with = "crate::iso_date")]
    pub check_out: Date,
    /// Number of occupied nights. Always positive.
    pub nights: u32,
    /// Requested arrival time.
    #[serde(
        default,
        with = "crate::clock::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_in_time: Option<Time>,
    /// Requested departure time.
    #[serde(
        default,
        with = "crate::clock::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_out_time: Option<Time>,
    /// Whether the customer asked to arrive early.
    #[serde(default)]
    pub early_check_in_requested: bool,
    /// Whether the customer asked to leave late.
    #[serde(default)]
    pub late_check_out_requested: bool,
    /// Surcharges included in the total price.
    #[serde(default)]
    pub fees: FeeBreakdown,
}

/// Whether a booking occupies one day or a run of nights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Stay {
    /// The booking occupies its primary date only.
    SingleDay,
    /// The booking occupies `[check_in, check_out)`.
    Range(RangeStay),
}

/// The time window of a single-day booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotWindow {
    /// The booked slot, when the day is hourly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<SlotId>,
    /// Start of the window.
    #[serde(with = "crate::clock")]
    pub start_time: Time,
    /// End of the window, when known.
    #[serde(
        default,
        with = "crate::clock::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<Time>,
}

/// A customer's booking as recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier.
    pub id: BookingId,
    /// Primary date. The check-in date for range bookings.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// Single day or range of nights.
    pub stay: Stay,
    /// Slot or clock window, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<SlotWindow>,
    /// Units booked. Always at least one.
    pub quantity: u32,
    /// Price charged, including fees.
    pub total_price: Decimal,
    /// Contact details.
    pub customer: CustomerInfo,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Set for bookings that entered through a calendar import. They never
    /// committed inventory, so status changes leave the store alone.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub imported: bool,
    /// When the booking was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the status last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Booking {
    /// Returns the range details for multi-night bookings.
    #[must_use]
    pub const fn range(&self) -> Option<&RangeStay> {
        match &self.stay {
            Stay::SingleDay => None,
            Stay::Range(range) => Some(range),
        }
    }

    /// Number of nights for range bookings, `None` for single-day bookings.
    #[must_use]
    pub const fn nights(&self) -> Option<u32> {
        match &self.stay {
            Stay::SingleDay => None,
            Stay::Range(range) => Some(range.nights),
        }
    }

    /// The booked slot, if any.
    #[must_use]
    pub fn slot_id(&self) -> Option<&SlotId> {
        self.slot.as_ref().and_then(|window| window.slot_id.as_ref())
    }

    /// Whether this booking's status changes move inventory.
    #[must_use]
    pub const fn holds_inventory(&self) -> bool {
        !self.imported
    }

    /// Every date whose inventory this booking consumes.
    #[must_use]
    pub fn occupied_dates(&self) -> Vec<Date> {
        match &self.stay {
            Stay::SingleDay => vec![self.date],
            Stay::Range(range) => date_range(range.check_in, range.check_out).collect(),
        }
    }

    /// Returns the booking with a new status, stamped at `now`.
    ///
    /// Status and `updated_at` are the only fields that change after creation.
    #[must_use]
    pub fn transition_status(self, status: BookingStatus, now: OffsetDateTime) -> Self {
        Self {
            status,
            updated_at: now,
            ..self
        }
    }
}
