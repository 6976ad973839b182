// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::{is_earlier_clock, is_later_clock, stay_duration_hours};
use crate::settings::BookingSettings;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, Time};

const PENALTY_THRESHOLD_HOURS: f64 = 24.0;

/// Everything the fee calculation looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeInputs {
    /// Check-in date.
    pub check_in: Option<Date>,
    /// Check-out date.
    pub check_out: Option<Date>,
    /// Requested arrival time.
    pub check_in_time: Option<Time>,
    /// Requested departure time.
    pub check_out_time: Option<Time>,
    /// Standard arrival time. Unset means no early fee can apply.
    pub standard_check_in: Option<Time>,
    /// Standard departure time. Unset means no late fee can apply.
    pub standard_check_out: Option<Time>,
    /// Amount charged for an early arrival.
    pub early_check_in_fee: Decimal,
    /// Amount charged for a late departure.
    pub late_check_out_fee: Decimal,
    /// Check-in day's base price, charged once more when the stay exceeds
    /// 24 hours.
    pub unit_price: Decimal,
}

impl FeeInputs {
    /// Builds fee inputs for a range stay from operator settings.
    ///
    /// Disabled fees contribute an amount of zero. When check-in/out times are
    /// not enforced the standard times are treated as unset.
    ///
    /// # Arguments
    ///
    /// * `settings` - Operator settings
    /// * `check_in` - Check-in date
    /// * `check_out` - Check-out date
    /// * `check_in_time` - Requested arrival time
    /// * `check_out_time` - Requested departure time
    /// * `unit_price` - Base price of the check-in day
    #[must_use]
    pub fn from_settings(
        settings: &BookingSettings,
        check_in: Date,
        check_out: Date,
        check_in_time: Option<Time>,
        check_out_time: Option<Time>,
        unit_price: Decimal,
    ) -> Self {
        let enforce: bool = settings.enforce_check_in_out_times;
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
            check_in_time,
            check_out_time,
            standard_check_in: settings.default_check_in_time.filter(|_| enforce),
            standard_check_out: settings.default_check_out_time.filter(|_| enforce),
            early_check_in_fee: if settings.enable_early_check_in_fee {
                settings.early_check_in_fee
            } else {
                Decimal::ZERO
            },
            late_check_out_fee: if settings.enable_late_check_out_fee {
                settings.late_check_out_fee
            } else {
                Decimal::ZERO
            },
            unit_price,
        }
    }
}

/// Surcharges applied to a range booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// Charged when arriving before the standard check-in time.
    pub early_check_in_fee: Decimal,
    /// Charged when leaving after the standard check-out time.
    pub late_check_out_fee: Decimal,
    /// Charged when the stay runs longer than 24 hours.
    pub over_24h_penalty: Decimal,
    /// Sum of the three components.
    pub total: Decimal,
}

/// Computes the surcharges for a stay.
///
/// - The early fee applies when a requested check-in time is earlier than the
///   standard check-in time.
/// - The late fee applies when a requested check-out time is later than the
///   standard check-out time.
/// - The over-24h penalty (one unit price) applies when both dates and both
///   requested times are known and the stay lasts more than 24 hours.
#[must_use]
pub fn compute_fees(inputs: &FeeInputs) -> FeeBreakdown {
    let early_check_in_fee: Decimal = match (inputs.check_in_time, inputs.standard_check_in) {
        (Some(requested), Some(standard)) if is_earlier_clock(requested, standard) => {
            inputs.early_check_in_fee
        }
        _ => Decimal::ZERO,
    };

    let late_check_out_fee: Decimal = match (inputs.check_out_time, inputs.standard_check_out) {
        (Some(requested), Some(standard)) if is_later_clock(requested, standard) => {
            inputs.late_check_out_fee
        }
        _ => Decimal::ZERO,
    };

    let over_24h_penalty: Decimal = match (inputs.check_in, inputs.check_out) {
        (Some(check_in), Some(check_out))
            if stay_duration_hours(
                check_in,
                inputs.check_in_time,
                check_out,
                inputs.check_out_time,
            ) > PENALTY_THRESHOLD_HOURS =>
        {
            inputs.unit_price
        }
        _ => Decimal::ZERO,
    };

    FeeBreakdown {
        early_check_in_fee,
        late_check_out_fee,
        over_24h_penalty,
        total: early_check_in_fee + late_check_out_fee + over_24h_penalty,
    }
}
