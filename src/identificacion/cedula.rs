//! Cédula de identidad (10-digit natural-person identifier) validation.

use crate::core::checksum::modulo10;

use super::{IdentityError, check_province, digits_of};

/// Validate a cédula, reporting the first failing rule.
///
/// Checks run in a fixed order: required, length (10), digits only,
/// province prefix in `01..=24`, third digit `0..=5`, modulo-10 check
/// digit. Leading/trailing whitespace is ignored.
pub fn validate_cedula(cedula: &str) -> Result<(), IdentityError> {
    let cedula = cedula.trim();
    let digits = digits_of(cedula, 10)?;
    check_province(&digits)?;
    if digits[2] > 5 {
        return Err(IdentityError::InvalidThirdDigit);
    }
    if modulo10(&digits[..9]) != digits[9] {
        return Err(IdentityError::InvalidCheckDigit);
    }
    Ok(())
}

/// Non-failing form of [`validate_cedula`].
pub fn is_valid_cedula(cedula: &str) -> bool {
    validate_cedula(cedula).is_ok()
}
