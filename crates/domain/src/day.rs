// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::generate_slots;
use crate::error::DomainError;
use crate::settings::BookingSettings;
use crate::types::SlotId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, Time};
use time::macros::time;

/// A bookable sub-interval of a day with its own capacity and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Identifier, unique within the day.
    pub id: SlotId,
    /// Slot start.
    #[serde(with = "crate::clock")]
    pub start_time: Time,
    /// Slot end.
    #[serde(with = "crate::clock")]
    pub end_time: Time,
    /// Whether the slot accepts bookings.
    pub available: bool,
    /// Configured capacity.
    pub quantity: u32,
    /// Capacity already committed.
    pub booked_quantity: u32,
    /// Unit price for this slot.
    pub price: Decimal,
}

impl TimeSlot {
    /// Creates an available, unbooked slot.
    ///
    /// # Arguments
    ///
    /// * `id` - The slot identifier
    /// * `start_time` - Slot start
    /// * `end_time` - Slot end
    /// * `quantity` - Configured capacity
    /// * `price` - Unit price
    #[must_use]
    pub const fn new(
        id: SlotId,
        start_time: Time,
        end_time: Time,
        quantity: u32,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            start_time,
            end_time,
            available: true,
            quantity,
            booked_quantity: 0,
            price,
        }
    }

    /// Remaining capacity in this slot.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.booked_quantity)
    }
}

/// Whether a day is booked as a whole or per time slot.
///
/// The slot list exists exactly when the day is hourly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DayMode {
    /// Capacity is tracked on the day record itself.
    #[default]
    WholeDay,
    /// Capacity and price are tracked per slot.
    Hourly {
        /// The day's slots.
        slots: Vec<TimeSlot>,
    },
}

/// Availability, price and capacity for one calendar date.
///
/// For hourly days the day-level `max_quantity` and `booked_quantity` are
/// advisory and the slot figures are authoritative. `base_price` stays the
/// fallback unit price in both modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    /// The date this record describes.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// Whether the day accepts bookings at all.
    pub is_available: bool,
    /// Unit price for whole-day bookings.
    pub base_price: Decimal,
    /// Day-level capacity.
    pub max_quantity: u32,
    /// Day-level committed capacity.
    pub booked_quantity: u32,
    /// Booking granularity for the day.
    #[serde(default)]
    pub mode: DayMode,
}

impl DayAvailability {
    /// Creates the default record for a date from operator settings.
    ///
    /// The day starts in hourly mode with generated slots when the settings
    /// enable hourly booking.
    #[must_use]
    pub fn from_defaults(date: Date, settings: &BookingSettings) -> Self {
        let day: Self = Self {
            date,
            is_available: true,
            base_price: settings.default_price,
            max_quantity: settings.default_quantity,
            booked_quantity: 0,
            mode: DayMode::WholeDay,
        };

        if settings.use_hourly_booking {
            day.with_default_slots(settings)
        } else {
            day
        }
    }

    /// Generates the default slots for the configured working hours.
    #[must_use]
    pub fn default_slots(settings: &BookingSettings) -> Vec<TimeSlot> {
        generate_slots(
            settings.working_hours.start,
            settings.working_hours.end,
            settings.slot_duration_minutes,
        )
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| {
            TimeSlot::new(
                SlotId::generated(index),
                start,
                end,
                settings.default_quantity,
                settings.default_price,
            )
        })
        .collect()
    }

    /// Returns whether the day is booked per slot.
    #[must_use]
    pub const fn is_hourly(&self) -> bool {
        matches!(self.mode, DayMode::Hourly { .. })
    }

    /// The day's slots. Empty for whole-day records.
    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        match &self.mode {
            DayMode::WholeDay => &[],
            DayMode::Hourly { slots } => slots,
        }
    }

    /// Finds a slot by identifier.
    #[must_use]
    pub fn slot(&self, slot_id: &SlotId) -> Option<&TimeSlot> {
        self.slots().iter().find(|slot| &slot.id == slot_id)
    }

    pub(crate) fn slot_mut(&mut self, slot_id: &SlotId) -> Option<&mut TimeSlot> {
        match &mut self.mode {
            DayMode::WholeDay => None,
            DayMode::Hourly { slots } => slots.iter_mut().find(|slot| &slot.id == slot_id),
        }
    }

    /// Day-level remaining capacity.
    #[must_use]
    pub const fn day_remaining(&self) -> u32 {
        self.max_quantity.saturating_sub(self.booked_quantity)
    }

    /// Remaining capacity as shown on the calendar.
    ///
    /// Hourly days report the sum over their available slots; whole days
    /// report the day-level remainder.
    #[must_use]
    pub fn available_quantity(&self) -> u32 {
        match &self.mode {
            DayMode::WholeDay => self.day_remaining(),
            DayMode::Hourly { slots } => slots
                .iter()
                .filter(|slot| slot.available)
                .map(TimeSlot::remaining)
                .sum(),
        }
    }

    /// Switches the day to whole-day booking, dropping any slots.
    #[must_use]
    pub fn into_whole_day(self) -> Self {
        Self {
            mode: DayMode::WholeDay,
            ..self
        }
    }

    /// Switches the day to hourly booking with the given slots.
    ///
    /// The slot list replaces any existing one and every slot starts with
    /// nothing booked.
    #[must_use]
    pub fn into_hourly(self, slots: Vec<TimeSlot>) -> Self {
        let slots: Vec<TimeSlot> = slots
            .into_iter()
            .map(|slot| TimeSlot {
                booked_quantity: 0,
                ..slot
            })
            .collect();
        Self {
            mode: DayMode::Hourly { slots },
            ..self
        }
    }

    /// Switches the day to hourly booking with freshly generated slots.
    #[must_use]
    pub fn with_default_slots(self, settings: &BookingSettings) -> Self {
        self.into_hourly(Self::default_slots(settings))
    }

    /// Returns the first `slot-<n>` identifier not used on this day.
    #[must_use]
    pub fn next_slot_id(&self) -> SlotId {
        (0..=self.slots().len())
            .map(SlotId::generated)
            .find(|candidate| self.slot(candidate).is_none())
            .unwrap_or_else(|| SlotId::generated(self.slots().len()))
    }

    /// Creates a 09:00-10:00 slot with default capacity and price, ready to add.
    #[must_use]
    pub fn new_default_slot(&self, settings: &BookingSettings) -> TimeSlot {
        TimeSlot::new(
            self.next_slot_id(),
            time!(09:00),
            time!(10:00),
            settings.default_quantity,
            settings.default_price,
        )
    }

    /// Adds a slot. A whole-day record becomes hourly with just this slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateSlot` if the id is already in use.
    pub fn add_slot(&mut self, slot: TimeSlot) -> Result<(), DomainError> {
        if self.slot(&slot.id).is_some() {
            return Err(DomainError::DuplicateSlot {
                date: self.date,
                slot_id: slot.id,
            });
        }

        if let DayMode::Hourly { slots } = &mut self.mode {
            slots.push(slot);
        } else {
            self.mode = DayMode::Hourly { slots: vec![slot] };
        }
        Ok(())
    }

    /// Replaces the slot that has the same id as `slot`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotNotFound` if no such slot exists.
    pub fn update_slot(&mut self, slot: TimeSlot) -> Result<(), DomainError> {
        let date: Date = self.date;
        let existing: &mut TimeSlot =
            self.slot_mut(&slot.id).ok_or_else(|| DomainError::SlotNotFound {
                date,
                slot_id: slot.id.clone(),
            })?;
        *existing = slot;
        Ok(())
    }

    /// Removes a slot and returns it. The day stays hourly even when empty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotNotFound` if no such slot exists.
    pub fn remove_slot(&mut self, slot_id: &SlotId) -> Result<TimeSlot, DomainError> {
        let date: Date = self.date;
        let not_found = || DomainError::SlotNotFound {
            date,
            slot_id: slot_id.clone(),
        };
        let DayMode::Hourly { slots } = &mut self.mode else {
            return Err(not_found());
        };
        let index: usize = slots
            .iter()
            .position(|slot| &slot.id == slot_id)
            .ok_or_else(not_found)?;
        Ok(slots.remove(index))
    }
}
