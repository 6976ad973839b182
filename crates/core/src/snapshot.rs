// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-snapshot JSON encoding for the external key-value store.
//!
//! Each snapshot is loaded and saved in one piece: the availability list, the
//! booking list and the settings are separate documents.

use crate::error::CoreError;
use crate::state::State;
use booking_domain::{AvailabilityStore, BookingLedger, BookingSettings};

/// Encodes the availability list.
///
/// # Errors
///
/// Returns `CoreError::Snapshot` if serialization fails.
pub fn encode_availability(store: &AvailabilityStore) -> Result<String, CoreError> {
    Ok(serde_json::to_string(store)?)
}

/// Decodes the availability list.
///
/// # Errors
///
/// Returns `CoreError::Snapshot` if the document is not a valid availability list.
pub fn decode_availability(json: &str) -> Result<AvailabilityStore, CoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Encodes the booking list.
///
/// # Errors
///
/// Returns `CoreError::Snapshot` if serialization fails.
pub fn encode_bookings(ledger: &BookingLedger) -> Result<String, CoreError> {
    Ok(serde_json::to_string(ledger)?)
}

/// Decodes the booking list.
///
/// # Errors
///
/// Returns `CoreError::Snapshot` if the document is not a valid booking list.
pub fn decode_bookings(json: &str) -> Result<BookingLedger, CoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Encodes the settings.
///
/// # Errors
///
/// Returns `CoreError::Snapshot` if serialization fails.
pub fn encode_settings(settings: &BookingSettings) -> Result<String, CoreError> {
    Ok(serde_json::to_string(settings)?)
}

/// Decodes and validates the settings.
///
/// Fields missing from the document take their default values.
///
/// # Errors
///
/// Returns an error if:
/// - The document is not valid settings JSON
/// - The decoded settings fail validation
pub fn decode_settings(json: &str) -> Result<BookingSettings, CoreError> {
    let settings: BookingSettings = serde_json::from_str(json)?;
    settings.validate()?;
    Ok(settings)
}

/// Loads a state from its two stored documents.
///
/// # Errors
///
/// Returns `CoreError::Snapshot` if either document fails to decode.
pub fn decode_state(availability_json: &str, bookings_json: &str) -> Result<State, CoreError> {
    Ok(State::from_parts(
        decode_availability(availability_json)?,
        decode_bookings(bookings_json)?,
    ))
}
