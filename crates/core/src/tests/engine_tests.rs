// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    add_hourly_day, create_range_request, create_single_day_request, create_test_customer,
    create_test_now, create_test_settings, create_test_store,
};
use crate::{
    BookingError, BookingOutcome, BookingRequest, CapacityCommit, PriceQuote, StayRequest,
    apply_commits, create_booking, quote,
};
use booking_domain::{
    AvailabilityStore, BookingSettings, BookingStatus, CustomerInfo, DayAvailability, DomainError,
    SlotId, Stay, TimeSlot,
};
use rust_decimal::Decimal;
use time::Date;
use time::macros::{date, time};

fn set_booked(store: &mut AvailabilityStore, date: Date, booked: u32) {
    let mut day: DayAvailability = store.get(date).unwrap().clone();
    day.booked_quantity = booked;
    store.upsert_day(day);
}

#[test]
fn test_single_day_booking_prices_and_commits() {
    let mut store: AvailabilityStore = create_test_store();
    set_booked(&mut store, date!(2024 - 06 - 01), 2);
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 01), 3);

    let outcome: BookingOutcome =
        create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    assert_eq!(outcome.booking.total_price, Decimal::from(300));
    assert_eq!(
        outcome.commits,
        vec![CapacityCommit {
            date: date!(2024 - 06 - 01),
            slot_id: None,
            quantity: 3,
        }]
    );

    let updated: AvailabilityStore = apply_commits(&store, &outcome.commits).unwrap();
    assert_eq!(
        updated.get(date!(2024 - 06 - 01)).unwrap().booked_quantity,
        5
    );
    assert_eq!(updated.remaining_capacity(date!(2024 - 06 - 01), None), 5);
}

#[test]
fn test_create_booking_does_not_modify_store() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 01), 3);

    create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    assert_eq!(store, create_test_store());
}

#[test]
fn test_new_booking_record_fields() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 02), 1);

    let outcome: BookingOutcome =
        create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    let booking = &outcome.booking;
    assert!(booking.id.value().starts_with("booking-"));
    assert_eq!(booking.date, date!(2024 - 06 - 02));
    assert_eq!(booking.stay, Stay::SingleDay);
    assert_eq!(booking.slot, None);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.created_at, create_test_now());
    assert_eq!(booking.updated_at, booking.created_at);
    assert_eq!(booking.customer, create_test_customer());
}

#[test]
fn test_booking_ids_are_unique() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 02), 1);
    let settings: BookingSettings = create_test_settings();

    let first: BookingOutcome =
        create_booking(&store, &settings, &request, create_test_now()).unwrap();
    let second: BookingOutcome =
        create_booking(&store, &settings, &request, create_test_now()).unwrap();

    assert_ne!(first.booking.id, second.booking.id);
}

#[test]
fn test_blank_customer_name_is_rejected_first() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = BookingRequest {
        customer: CustomerInfo::new("  ", "jane@example.com"),
        ..create_single_day_request(date!(2024 - 07 - 01), 0)
    };

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::InvalidCustomerInfo { field: "name" }
    );
}

#[test]
fn test_blank_customer_email_is_rejected() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = BookingRequest {
        customer: CustomerInfo::new("Jane Doe", ""),
        ..create_single_day_request(date!(2024 - 06 - 01), 1)
    };

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::InvalidCustomerInfo { field: "email" }
    );
}

#[test]
fn test_zero_quantity_is_rejected() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 01), 0);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::InvalidQuantity { quantity: 0 }
    );
}

#[test]
fn test_missing_day_is_unavailable() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = create_single_day_request(date!(2024 - 07 - 01), 1);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::DateUnavailable {
            date: date!(2024 - 07 - 01)
        }
    );
}

#[test]
fn test_day_marked_unavailable_is_rejected() {
    let mut store: AvailabilityStore = create_test_store();
    let mut day: DayAvailability = store.get(date!(2024 - 06 - 01)).unwrap().clone();
    day.is_available = false;
    store.upsert_day(day);
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 01), 1);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert!(matches!(
        result,
        Err(BookingError::DateUnavailable { .. })
    ));
}

#[test]
fn test_insufficient_day_capacity() {
    let mut store: AvailabilityStore = create_test_store();
    set_booked(&mut store, date!(2024 - 06 - 01), 8);
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 01), 3);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::InsufficientCapacity {
            date: date!(2024 - 06 - 01),
            requested: 3,
            remaining: 2,
        }
    );
}

#[test]
fn test_range_booking_commits_every_night() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest =
        create_range_request(date!(2024 - 06 - 01), date!(2024 - 06 - 04), 2);

    let outcome: BookingOutcome =
        create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    let committed: Vec<Date> = outcome.commits.iter().map(|commit| commit.date).collect();
    assert_eq!(
        committed,
        vec![date!(2024 - 06 - 01), date!(2024 - 06 - 02), date!(2024 - 06 - 03)]
    );
    assert_eq!(outcome.booking.date, date!(2024 - 06 - 01));
    assert_eq!(outcome.booking.nights(), Some(3));
    assert_eq!(outcome.booking.total_price, Decimal::from(600));

    let updated: AvailabilityStore = apply_commits(&store, &outcome.commits).unwrap();
    assert_eq!(updated.get(date!(2024 - 06 - 03)).unwrap().booked_quantity, 2);
    assert_eq!(updated.get(date!(2024 - 06 - 04)).unwrap().booked_quantity, 0);
}

#[test]
fn test_range_below_minimum_stay() {
    let store: AvailabilityStore = create_test_store();
    let settings: BookingSettings = BookingSettings {
        minimum_nights: 2,
        ..create_test_settings()
    };
    let request: BookingRequest =
        create_range_request(date!(2024 - 06 - 01), date!(2024 - 06 - 02), 1);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &settings, &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::BelowMinimumStay {
            nights: 1,
            minimum: 2,
        }
    );
}

#[test]
fn test_reversed_range_is_below_minimum_stay() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest =
        create_range_request(date!(2024 - 06 - 05), date!(2024 - 06 - 02), 1);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::BelowMinimumStay {
            nights: 0,
            minimum: 1,
        }
    );
}

#[test]
fn test_range_missing_check_out_date() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = BookingRequest {
        stay: StayRequest::Range {
            check_in: Some(date!(2024 - 06 - 01)),
            check_out: None,
            check_in_time: None,
            check_out_time: None,
            early_check_in_requested: false,
            late_check_out_requested: false,
        },
        ..create_single_day_request(date!(2024 - 06 - 01), 1)
    };

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(result.unwrap_err(), BookingError::MissingDates);
}

#[test]
fn test_range_rejected_when_disabled() {
    let store: AvailabilityStore = create_test_store();
    let settings: BookingSettings = BookingSettings {
        allow_range_booking: false,
        ..create_test_settings()
    };
    let request: BookingRequest =
        create_range_request(date!(2024 - 06 - 01), date!(2024 - 06 - 03), 1);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &settings, &request, create_test_now());

    assert_eq!(result.unwrap_err(), BookingError::RangeBookingDisabled);
}

#[test]
fn test_range_reports_first_unavailable_night() {
    let mut store: AvailabilityStore = create_test_store();
    for date in [date!(2024 - 06 - 03), date!(2024 - 06 - 04)] {
        let mut day: DayAvailability = store.get(date).unwrap().clone();
        day.is_available = false;
        store.upsert_day(day);
    }
    let request: BookingRequest =
        create_range_request(date!(2024 - 06 - 01), date!(2024 - 06 - 06), 1);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::DateUnavailable {
            date: date!(2024 - 06 - 03)
        }
    );
}

#[test]
fn test_range_capacity_checked_on_every_night() {
    let mut store: AvailabilityStore = create_test_store();
    set_booked(&mut store, date!(2024 - 06 - 03), 9);
    let request: BookingRequest =
        create_range_request(date!(2024 - 06 - 01), date!(2024 - 06 - 04), 2);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::InsufficientCapacity {
            date: date!(2024 - 06 - 03),
            requested: 2,
            remaining: 1,
        }
    );
}

#[test]
fn test_apply_commits_never_partially_applies() {
    let mut store: AvailabilityStore = create_test_store();
    set_booked(&mut store, date!(2024 - 06 - 02), 9);
    let commits: Vec<CapacityCommit> = vec![
        CapacityCommit {
            date: date!(2024 - 06 - 01),
            slot_id: None,
            quantity: 2,
        },
        CapacityCommit {
            date: date!(2024 - 06 - 02),
            slot_id: None,
            quantity: 2,
        },
    ];

    let result: Result<AvailabilityStore, DomainError> = apply_commits(&store, &commits);

    assert!(matches!(
        result,
        Err(DomainError::CapacityInvariant { remaining: 1, .. })
    ));
    assert_eq!(store.get(date!(2024 - 06 - 01)).unwrap().booked_quantity, 0);
}

#[test]
fn test_hourly_day_without_slot_books_the_day() {
    let mut store: AvailabilityStore = create_test_store();
    add_hourly_day(&mut store, date!(2024 - 06 - 15));
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 15), 1);

    let outcome: BookingOutcome =
        create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    assert_eq!(outcome.booking.slot, None);
    assert_eq!(outcome.booking.total_price, Decimal::from(100));
    assert_eq!(
        outcome.commits,
        vec![CapacityCommit {
            date: date!(2024 - 06 - 15),
            slot_id: None,
            quantity: 1,
        }]
    );
    let updated: AvailabilityStore = apply_commits(&store, &outcome.commits).unwrap();
    assert_eq!(updated.remaining_capacity(date!(2024 - 06 - 15), None), 9);
}

#[test]
fn test_hourly_day_without_slot_checks_day_capacity() {
    let mut store: AvailabilityStore = create_test_store();
    add_hourly_day(&mut store, date!(2024 - 06 - 15));
    set_booked(&mut store, date!(2024 - 06 - 15), 9);
    let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 15), 2);

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::InsufficientCapacity {
            date: date!(2024 - 06 - 15),
            requested: 2,
            remaining: 1,
        }
    );
}

#[test]
fn test_hourly_day_rejects_unknown_or_closed_slot() {
    let mut store: AvailabilityStore = create_test_store();
    add_hourly_day(&mut store, date!(2024 - 06 - 15));
    let mut day: DayAvailability = store.get(date!(2024 - 06 - 15)).unwrap().clone();
    let closed: TimeSlot = TimeSlot {
        available: false,
        ..day.slot(&SlotId::new("slot-2")).unwrap().clone()
    };
    day.update_slot(closed).unwrap();
    store.upsert_day(day);
    let settings: BookingSettings = create_test_settings();

    for slot in ["slot-99", "slot-2"] {
        let request: BookingRequest = create_single_day_request(date!(2024 - 06 - 15), 1)
            .with_slot(SlotId::new(slot));
        let result: Result<BookingOutcome, BookingError> =
            create_booking(&store, &settings, &request, create_test_now());
        assert_eq!(
            result.unwrap_err(),
            BookingError::SlotUnavailable {
                date: date!(2024 - 06 - 15),
                slot_id: SlotId::new(slot),
            }
        );
    }
}

#[test]
fn test_hourly_booking_uses_slot_price_and_commits_slot() {
    let mut store: AvailabilityStore = create_test_store();
    add_hourly_day(&mut store, date!(2024 - 06 - 15));
    let request: BookingRequest =
        create_single_day_request(date!(2024 - 06 - 15), 2).with_slot(SlotId::new("slot-1"));

    let outcome: BookingOutcome =
        create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    assert_eq!(outcome.booking.total_price, Decimal::from(150));
    let window = outcome.booking.slot.clone().unwrap();
    assert_eq!(window.slot_id, Some(SlotId::new("slot-1")));
    assert_eq!(window.start_time, time!(10:00));
    assert_eq!(window.end_time, Some(time!(11:00)));
    assert_eq!(
        outcome.commits,
        vec![CapacityCommit {
            date: date!(2024 - 06 - 15),
            slot_id: Some(SlotId::new("slot-1")),
            quantity: 2,
        }]
    );

    let updated: AvailabilityStore = apply_commits(&store, &outcome.commits).unwrap();
    assert_eq!(
        updated.remaining_capacity(date!(2024 - 06 - 15), Some(&SlotId::new("slot-1"))),
        8
    );
}

#[test]
fn test_hourly_slot_capacity_is_enforced() {
    let mut store: AvailabilityStore = create_test_store();
    add_hourly_day(&mut store, date!(2024 - 06 - 15));
    let request: BookingRequest =
        create_single_day_request(date!(2024 - 06 - 15), 11).with_slot(SlotId::new("slot-0"));

    let result: Result<BookingOutcome, BookingError> =
        create_booking(&store, &create_test_settings(), &request, create_test_now());

    assert_eq!(
        result.unwrap_err(),
        BookingError::InsufficientCapacity {
            date: date!(2024 - 06 - 15),
            requested: 11,
            remaining: 10,
        }
    );
}

#[test]
fn test_slot_is_ignored_on_whole_day() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest =
        create_single_day_request(date!(2024 - 06 - 01), 1).with_slot(SlotId::new("slot-1"));

    let outcome: BookingOutcome =
        create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    assert_eq!(outcome.booking.slot, None);
    assert_eq!(outcome.commits[0].slot_id, None);
    assert_eq!(outcome.booking.total_price, Decimal::from(100));
}

#[test]
fn test_range_booking_adds_fees() {
    let store: AvailabilityStore = create_test_store();
    let settings: BookingSettings = BookingSettings {
        default_check_in_time: Some(time!(14:00)),
        default_check_out_time: Some(time!(10:00)),
        enforce_check_in_out_times: true,
        early_check_in_fee: Decimal::from(25),
        late_check_out_fee: Decimal::from(30),
        enable_early_check_in_fee: true,
        enable_late_check_out_fee: true,
        ..create_test_settings()
    };
    let request: BookingRequest = BookingRequest {
        stay: StayRequest::Range {
            check_in: Some(date!(2024 - 06 - 01)),
            check_out: Some(date!(2024 - 06 - 03)),
            check_in_time: Some(time!(10:00)),
            check_out_time: Some(time!(13:00)),
            early_check_in_requested: true,
            late_check_out_requested: true,
        },
        ..create_single_day_request(date!(2024 - 06 - 01), 1)
    };

    let outcome: BookingOutcome =
        create_booking(&store, &settings, &request, create_test_now()).unwrap();

    let range = outcome.booking.range().unwrap();
    assert_eq!(range.nights, 2);
    assert_eq!(range.fees.early_check_in_fee, Decimal::from(25));
    assert_eq!(range.fees.late_check_out_fee, Decimal::from(30));
    assert_eq!(range.fees.over_24h_penalty, Decimal::from(100));
    assert_eq!(range.fees.total, Decimal::from(155));
    assert!(range.early_check_in_requested);
    assert_eq!(outcome.booking.total_price, Decimal::from(355));
}

#[test]
fn test_over_24h_penalty_uses_check_in_base_price() {
    let mut store: AvailabilityStore = create_test_store();
    add_hourly_day(&mut store, date!(2024 - 06 - 15));
    let request: BookingRequest = BookingRequest {
        stay: StayRequest::Range {
            check_in: Some(date!(2024 - 06 - 15)),
            check_out: Some(date!(2024 - 06 - 16)),
            check_in_time: Some(time!(10:00)),
            check_out_time: Some(time!(13:00)),
            early_check_in_requested: false,
            late_check_out_requested: false,
        },
        ..create_single_day_request(date!(2024 - 06 - 15), 1).with_slot(SlotId::new("slot-1"))
    };

    let outcome: BookingOutcome =
        create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    let range = outcome.booking.range().unwrap();
    assert_eq!(range.nights, 1);
    assert_eq!(range.fees.over_24h_penalty, Decimal::from(100));
    assert_eq!(outcome.booking.total_price, Decimal::from(175));
}

#[test]
fn test_range_without_times_has_no_fees() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest =
        create_range_request(date!(2024 - 06 - 01), date!(2024 - 06 - 03), 1);

    let outcome: BookingOutcome =
        create_booking(&store, &create_test_settings(), &request, create_test_now()).unwrap();

    assert_eq!(outcome.booking.range().unwrap().fees.total, Decimal::ZERO);
    assert_eq!(outcome.booking.total_price, Decimal::from(200));
}

#[test]
fn test_quote_matches_booking_total() {
    let mut store: AvailabilityStore = create_test_store();
    let mut day: DayAvailability = store.get(date!(2024 - 06 - 01)).unwrap().clone();
    day.base_price = Decimal::new(12_550, 2);
    store.upsert_day(day);
    let request: BookingRequest =
        create_range_request(date!(2024 - 06 - 01), date!(2024 - 06 - 03), 2);
    let settings: BookingSettings = create_test_settings();

    let price: PriceQuote = quote(&store, &settings, &request).unwrap();
    let outcome: BookingOutcome =
        create_booking(&store, &settings, &request, create_test_now()).unwrap();

    assert_eq!(price.unit_price, Decimal::new(12_550, 2));
    assert_eq!(price.nights, Some(2));
    assert_eq!(price.base_price, Decimal::new(50_200, 2));
    assert_eq!(price.total_price, outcome.booking.total_price);
}

#[test]
fn test_quote_reports_rejection() {
    let store: AvailabilityStore = create_test_store();
    let request: BookingRequest = create_single_day_request(date!(2024 - 08 - 01), 1);

    let result: Result<PriceQuote, BookingError> =
        quote(&store, &create_test_settings(), &request);

    assert!(matches!(
        result,
        Err(BookingError::DateUnavailable { .. })
    ));
}
