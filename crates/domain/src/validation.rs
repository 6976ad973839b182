// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::CustomerInfo;

/// Validates that a customer's required contact fields are present.
///
/// This function checks that required fields are not blank. It does NOT
/// check the email address format.
///
/// # Arguments
///
/// * `customer` - The customer details to validate
///
/// # Returns
///
/// * `Ok(())` if the required fields are present
/// * `Err(DomainError::InvalidCustomerInfo)` naming the first blank field
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty after trimming
/// - The email is empty after trimming
pub fn validate_customer_info(customer: &CustomerInfo) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if customer.name.trim().is_empty() {
        return Err(DomainError::InvalidCustomerInfo { field: "name" });
    }

    // Rule: email must not be blank
    if customer.email.trim().is_empty() {
        return Err(DomainError::InvalidCustomerInfo { field: "email" });
    }

    Ok(())
}

/// Validates that a booking quantity is at least one.
///
/// # Errors
///
/// Returns `DomainError::InvalidQuantity` if the quantity is zero.
pub const fn validate_quantity(quantity: u32) -> Result<(), DomainError> {
    if quantity == 0 {
        return Err(DomainError::InvalidQuantity { quantity });
    }
    Ok(())
}
