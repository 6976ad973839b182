// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::inclusive_date_range;
use crate::day::{DayAvailability, TimeSlot};
use crate::error::DomainError;
use crate::settings::BookingSettings;
use crate::types::SlotId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, Duration};

/// How a bulk edit changes the booking granularity of each day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HourlyUpdate {
    /// Switch to whole-day booking, dropping slots.
    Disable,
    /// Switch to hourly booking with slots generated from settings.
    DefaultSlots,
    /// Switch to hourly booking with exactly these slots.
    CustomSlots(Vec<TimeSlot>),
}

/// Field changes applied to every day of a bulk edit.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkUpdate {
    /// New availability flag.
    pub is_available: Option<bool>,
    /// New base price.
    pub base_price: Option<Decimal>,
    /// New day-level capacity.
    pub max_quantity: Option<u32>,
    /// New booking granularity.
    pub hourly: Option<HourlyUpdate>,
}

impl BulkUpdate {
    /// Returns whether this update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_available.is_none()
            && self.base_price.is_none()
            && self.max_quantity.is_none()
            && self.hourly.is_none()
    }

    fn apply_to(&self, day: DayAvailability, settings: &BookingSettings) -> DayAvailability {
        let mut day: DayAvailability = match &self.hourly {
            None => day,
            Some(HourlyUpdate::Disable) => day.into_whole_day(),
            Some(HourlyUpdate::DefaultSlots) => day.with_default_slots(settings),
            Some(HourlyUpdate::CustomSlots(slots)) => day.into_hourly(slots.clone()),
        };
        if let Some(is_available) = self.is_available {
            day.is_available = is_available;
        }
        if let Some(base_price) = self.base_price {
            day.base_price = base_price;
        }
        if let Some(max_quantity) = self.max_quantity {
            day.max_quantity = max_quantity;
        }
        day
    }
}

/// Per-date inventory, keyed and ordered by date.
///
/// Serialized as a plain list of day records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DayAvailability>", into = "Vec<DayAvailability>")]
pub struct AvailabilityStore {
    days: BTreeMap<Date, DayAvailability>,
}

impl From<Vec<DayAvailability>> for AvailabilityStore {
    fn from(days: Vec<DayAvailability>) -> Self {
        Self::from_days(days)
    }
}

impl From<AvailabilityStore> for Vec<DayAvailability> {
    fn from(store: AvailabilityStore) -> Self {
        store.into_days()
    }
}

impl AvailabilityStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Builds a store from day records. Later records win on duplicate dates.
    #[must_use]
    pub fn from_days(days: impl IntoIterator<Item = DayAvailability>) -> Self {
        Self {
            days: days.into_iter().map(|day| (day.date, day)).collect(),
        }
    }

    /// Returns the day records in date order.
    #[must_use]
    pub fn into_days(self) -> Vec<DayAvailability> {
        self.days.into_values().collect()
    }

    /// Looks up the record for a date.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<&DayAvailability> {
        self.days.get(&date)
    }

    /// Iterates the records in date order.
    pub fn iter(&self) -> impl Iterator<Item = &DayAvailability> {
        self.days.values()
    }

    /// Number of day records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Replaces the record for the day's date, inserting it if absent.
    pub fn upsert_day(&mut self, day: DayAvailability) {
        self.days.insert(day.date, day);
    }

    /// Creates default records for every missing date in
    /// `[today, today + horizon_days]`.
    ///
    /// Existing records are never overwritten.
    ///
    /// # Returns
    ///
    /// The number of records created.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the window extends past
    /// the last representable date.
    pub fn ensure_window(
        &mut self,
        today: Date,
        horizon_days: u32,
        settings: &BookingSettings,
    ) -> Result<usize, DomainError> {
        let last: Date = today
            .checked_add(Duration::days(i64::from(horizon_days)))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("extending the window {horizon_days} days past {today}"),
            })?;

        let mut created: usize = 0;
        for date in inclusive_date_range(today, last) {
            self.days.entry(date).or_insert_with(|| {
                created += 1;
                DayAvailability::from_defaults(date, settings)
            });
        }
        Ok(created)
    }

    /// Remaining capacity for a date, or for one slot on that date.
    ///
    /// A missing day has no capacity. A missing or unavailable slot has no
    /// capacity.
    #[must_use]
    pub fn remaining_capacity(&self, date: Date, slot_id: Option<&SlotId>) -> u32 {
        let Some(day) = self.days.get(&date) else {
            return 0;
        };
        match slot_id {
            None => day.day_remaining(),
            Some(slot_id) => day
                .slot(slot_id)
                .filter(|slot| slot.available)
                .map_or(0, TimeSlot::remaining),
        }
    }

    /// Adds `amount` to the booked quantity of a day or slot.
    ///
    /// Callers validate capacity first; a commit that does not fit is rejected
    /// and the record is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The day does not exist
    /// - The slot does not exist on the day
    /// - The commit exceeds the remaining capacity
    pub fn commit(
        &mut self,
        date: Date,
        slot_id: Option<&SlotId>,
        amount: u32,
    ) -> Result<(), DomainError> {
        let day: &mut DayAvailability = self
            .days
            .get_mut(&date)
            .ok_or(DomainError::DayNotFound(date))?;

        let (quantity, booked): (u32, &mut u32) = match slot_id {
            None => (day.max_quantity, &mut day.booked_quantity),
            Some(slot_id) => {
                let slot: &mut TimeSlot =
                    day.slot_mut(slot_id).ok_or_else(|| DomainError::SlotNotFound {
                        date,
                        slot_id: slot_id.clone(),
                    })?;
                (slot.quantity, &mut slot.booked_quantity)
            }
        };

        let remaining: u32 = quantity.saturating_sub(*booked);
        if amount > remaining {
            return Err(DomainError::CapacityInvariant {
                date,
                slot_id: slot_id.cloned(),
                requested: amount,
                remaining,
            });
        }

        *booked += amount;
        Ok(())
    }

    /// Subtracts `amount` from the booked quantity of a day or slot.
    ///
    /// Saturates at zero. Missing days or slots are ignored.
    pub fn release(&mut self, date: Date, slot_id: Option<&SlotId>, amount: u32) {
        let Some(day) = self.days.get_mut(&date) else {
            return;
        };
        let booked: Option<&mut u32> = match slot_id {
            None => Some(&mut day.booked_quantity),
            Some(slot_id) => day.slot_mut(slot_id).map(|slot| &mut slot.booked_quantity),
        };
        if let Some(booked) = booked {
            *booked = booked.saturating_sub(amount);
        }
    }

    /// Applies the same field changes to every date in `[start, end]`.
    ///
    /// Missing dates are created from defaults before the update is merged.
    /// An empty range (start after end) changes nothing.
    ///
    /// # Returns
    ///
    /// The number of days updated.
    pub fn apply_bulk_update(
        &mut self,
        start: Date,
        end: Date,
        update: &BulkUpdate,
        settings: &BookingSettings,
    ) -> usize {
        let mut updated: usize = 0;
        for date in inclusive_date_range(start, end) {
            let day: DayAvailability = self
                .days
                .remove(&date)
                .unwrap_or_else(|| DayAvailability::from_defaults(date, settings));
            self.days.insert(date, update.apply_to(day, settings));
            updated += 1;
        }
        updated
    }
}
