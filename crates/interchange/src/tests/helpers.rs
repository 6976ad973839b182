// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use booking_domain::{
    Booking, BookingId, BookingSettings, BookingStatus, CustomerInfo, FeeBreakdown, RangeStay,
    SlotId, SlotWindow, Stay,
};
use rust_decimal::Decimal;
use time::macros::{date, datetime, time};
use time::OffsetDateTime;

pub fn create_test_settings() -> BookingSettings {
    BookingSettings {
        business_name: String::from("Lakeside Cabins"),
        default_price: Decimal::from(120),
        ..BookingSettings::default()
    }
}

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2024-05-20 12:00 UTC)
}

pub fn create_timed_booking() -> Booking {
    Booking {
        id: BookingId::new("booking-1"),
        date: date!(2024 - 06 - 01),
        stay: Stay::SingleDay,
        slot: Some(SlotWindow {
            slot_id: Some(SlotId::new("slot-1")),
            start_time: time!(10:00),
            end_time: Some(time!(11:00)),
        }),
        quantity: 2,
        total_price: Decimal::from(150),
        customer: CustomerInfo {
            name: String::from("Jane Doe"),
            email: String::from("jane@example.com"),
            phone: None,
            notes: Some(String::from("Window seat")),
        },
        status: BookingStatus::Confirmed,
        imported: false,
        created_at: create_test_now(),
        updated_at: create_test_now(),
    }
}

pub fn create_range_booking() -> Booking {
    Booking {
        id: BookingId::new("booking-2"),
        date: date!(2024 - 06 - 01),
        stay: Stay::Range(RangeStay {
            check_in: date!(2024 - 06 - 01),
            check_out: date!(2024 - 06 - 04),
            nights: 3,
            check_in_time: None,
            check_out_time: None,
            early_check_in_requested: false,
            late_check_out_requested: false,
            fees: FeeBreakdown::default(),
        }),
        slot: None,
        quantity: 1,
        total_price: Decimal::from(300),
        customer: CustomerInfo::new("John Smith", "john@example.com"),
        status: BookingStatus::Confirmed,
        imported: false,
        created_at: create_test_now(),
        updated_at: create_test_now(),
    }
}
