//! RUC (Registro Único de Contribuyentes) validation.
//!
//! A RUC is 13 digits: a 10-digit base identifier whose third digit
//! marks the legal regime, followed by a 3-digit establishment suffix.
//! Each regime carries its own checksum over the base.

use serde::{Deserialize, Serialize};

use crate::core::checksum::modulo11;

use super::{IdentityError, check_province, digits_of, validate_cedula};

const PUBLIC_WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];
const PRIVATE_WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Legal regime of a RUC holder, marked by the third digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RucRegime {
    /// Third digit `0..=5`: natural person; the base is a cédula.
    NaturalPerson,
    /// Third digit `6`: public institution.
    PublicSector,
    /// Third digit `9`: private company or foreign entity.
    PrivateCompany,
}

impl RucRegime {
    /// Classify from the third digit. `None` for the unassigned
    /// markers (7, 8).
    pub fn from_third_digit(digit: u8) -> Option<Self> {
        match digit {
            0..=5 => Some(Self::NaturalPerson),
            6 => Some(Self::PublicSector),
            9 => Some(Self::PrivateCompany),
            _ => None,
        }
    }
}

/// Classify a RUC string by regime without running its checksum.
///
/// Returns `None` when the string is too short, the third character is
/// not a digit, or the marker is unassigned.
pub fn regime_of(ruc: &str) -> Option<RucRegime> {
    let third = ruc.trim().as_bytes().get(2)?;
    if !third.is_ascii_digit() {
        return None;
    }
    RucRegime::from_third_digit(third - b'0')
}

/// Validate a RUC, reporting the first failing rule.
///
/// Checks run in a fixed order: required, length (13), digits only,
/// province prefix in `01..=24`, then the regime-specific checksum.
/// Regime sub-failures — a bad embedded cédula, a natural-person suffix
/// other than `001`, an unassigned regime marker — are all reported as
/// [`IdentityError::InvalidCheckDigit`].
pub fn validate_ruc(ruc: &str) -> Result<(), IdentityError> {
    let ruc = ruc.trim();
    let digits = digits_of(ruc, 13)?;
    check_province(&digits)?;

    match digits[2] {
        0..=5 => {
            // Natural person: 10-digit cédula base + fixed "001" suffix
            if validate_cedula(&ruc[..10]).is_err() || &ruc[10..] != "001" {
                return Err(IdentityError::InvalidCheckDigit);
            }
            Ok(())
        }
        6 => {
            let check = modulo11(digits[..8].iter().copied().zip(PUBLIC_WEIGHTS));
            if check != digits[8] {
                return Err(IdentityError::InvalidCheckDigit);
            }
            Ok(())
        }
        9 => {
            let check = modulo11(digits[..9].iter().copied().zip(PRIVATE_WEIGHTS));
            if check != digits[9] {
                return Err(IdentityError::InvalidCheckDigit);
            }
            Ok(())
        }
        // 7 and 8 are unassigned regime markers
        _ => Err(IdentityError::InvalidCheckDigit),
    }
}

/// Non-failing form of [`validate_ruc`].
pub fn is_valid_ruc(ruc: &str) -> bool {
    validate_ruc(ruc).is_ok()
}
