//! Cédula and RUC validation.
//!
//! Both identifiers are checksum-protected national tax identifiers:
//! the 10-digit cédula for natural persons and the 13-digit RUC for
//! registered taxpayers. Validators report the *first* failing rule —
//! entry forms rely on that precedence for their field-level messages.

mod cedula;
mod ruc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cedula::{is_valid_cedula, validate_cedula};
pub use ruc::{RucRegime, is_valid_ruc, regime_of, validate_ruc};

/// Why an identification number failed validation.
///
/// Variants are ordered by check precedence; a validator returns the
/// first one that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum IdentityError {
    /// Input was empty or whitespace.
    #[error("identification number is required")]
    Required,

    /// Wrong number of characters for the identification kind.
    #[error("wrong length")]
    WrongLength,

    /// A character outside `0-9`.
    #[error("must contain only digits")]
    NonNumeric,

    /// Province prefix (first two digits) outside `01..=24`.
    #[error("invalid province code")]
    InvalidProvince,

    /// Third digit outside the range a cédula allows (`0..=5`).
    #[error("invalid third digit")]
    InvalidThirdDigit,

    /// Checksum mismatch, or the regime-specific rules failed.
    ///
    /// RUC validation collapses its sub-reasons (embedded cédula
    /// failure, wrong suffix, unassigned regime marker) into this
    /// variant — the RUC level does not distinguish them.
    #[error("invalid check digit")]
    InvalidCheckDigit,
}

/// Parse a trimmed input into its digit values after the shared
/// required/length/digit checks.
fn digits_of(input: &str, expected_len: usize) -> Result<Vec<u8>, IdentityError> {
    if input.is_empty() {
        return Err(IdentityError::Required);
    }
    if input.len() != expected_len {
        return Err(IdentityError::WrongLength);
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentityError::NonNumeric);
    }
    Ok(input.bytes().map(|b| b - b'0').collect())
}

/// Province range check shared by cédulas and every RUC regime.
fn check_province(digits: &[u8]) -> Result<(), IdentityError> {
    let province = digits[0] * 10 + digits[1];
    if (1..=24).contains(&province) {
        Ok(())
    } else {
        Err(IdentityError::InvalidProvince)
    }
}
