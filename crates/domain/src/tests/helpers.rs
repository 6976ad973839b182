// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Booking, BookingId, BookingSettings, BookingStatus, CustomerInfo, DayAvailability, Stay,
};
use rust_decimal::Decimal;
use time::macros::datetime;
use time::{Date, OffsetDateTime};

pub fn create_test_settings() -> BookingSettings {
    BookingSettings::default()
}

pub fn create_hourly_settings() -> BookingSettings {
    BookingSettings {
        use_hourly_booking: true,
        ..BookingSettings::default()
    }
}

pub fn create_test_day(date: Date) -> DayAvailability {
    DayAvailability::from_defaults(date, &create_test_settings())
}

pub fn create_test_timestamp() -> OffsetDateTime {
    datetime!(2024-05-20 12:00 UTC)
}

pub fn create_test_booking(id: &str, date: Date, total_price: i64) -> Booking {
    Booking {
        id: BookingId::new(id),
        date,
        stay: Stay::SingleDay,
        slot: None,
        quantity: 1,
        total_price: Decimal::from(total_price),
        customer: CustomerInfo::new("Jane Doe", "jane@example.com"),
        status: BookingStatus::Confirmed,
        imported: false,
        created_at: create_test_timestamp(),
        updated_at: create_test_timestamp(),
    }
}
