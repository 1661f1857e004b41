use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::checksum::modulo11;
use crate::core::{Ambiente, DocumentoTipo, TipoEmision};

use super::ClaveError;

/// Cyclic check-digit weights, applied from the rightmost payload digit
/// outward.
const WEIGHT_CYCLE: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Modulo-11 check digit over the 48 payload digits.
pub(crate) fn check_digit(payload: &[u8]) -> u8 {
    modulo11(
        payload
            .iter()
            .rev()
            .zip(WEIGHT_CYCLE.iter().cycle())
            .map(|(&d, &w)| (d, w)),
    )
}

/// A verified 49-digit clave de acceso.
///
/// Opaque immutable wrapper around the digit string; two claves are
/// equal iff their strings are equal. Construct via
/// [`ClaveBuilder`](super::ClaveBuilder) or [`ClaveAcceso::parse`] —
/// both guarantee the trailing check digit holds, so the structural
/// accessors below can slice without re-checking shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaveAcceso(String);

impl ClaveAcceso {
    /// Parse and verify a clave string.
    ///
    /// Fails if the input is empty, not exactly 49 digits, or the
    /// trailing digit does not match the recomputed check digit.
    /// A mismatch is data corruption — callers must treat it as fatal,
    /// never repair it.
    pub fn parse(value: &str) -> Result<Self, ClaveError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ClaveError::invalid("clave", "must not be empty"));
        }
        if value.len() != 49 {
            return Err(ClaveError::invalid(
                "clave",
                format!("expected 49 digits, got {}", value.len()),
            ));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ClaveError::invalid("clave", "must contain only digits"));
        }
        let digits: Vec<u8> = value.bytes().map(|b| b - b'0').collect();
        let expected = check_digit(&digits[..48]);
        if expected != digits[48] {
            return Err(ClaveError::invalid(
                "clave",
                format!("check digit mismatch: expected {expected}, found {}", digits[48]),
            ));
        }
        Ok(Self(value.to_owned()))
    }

    /// Non-failing form of [`ClaveAcceso::parse`].
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Construct from a payload already assembled and check-digited by
    /// the builder.
    pub(crate) fn from_generated(value: String) -> Self {
        debug_assert_eq!(value.len(), 49);
        Self(value)
    }

    /// The full 49-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Issue date from the leading `DDMMYYYY` field.
    ///
    /// `None` when the embedded digits do not name a calendar date —
    /// possible for externally supplied claves whose check digit
    /// happens to hold.
    pub fn fecha_emision(&self) -> Option<NaiveDate> {
        let day: u32 = self.0[0..2].parse().ok()?;
        let month: u32 = self.0[2..4].parse().ok()?;
        let year: i32 = self.0[4..8].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Comprobante kind, `None` for codes outside the known registry.
    pub fn tipo(&self) -> Option<DocumentoTipo> {
        DocumentoTipo::from_code(&self.0[8..10])
    }

    /// Issuer RUC (13 digits, shape only — run
    /// [`validate_ruc`](crate::identificacion::validate_ruc) for the
    /// checksum).
    pub fn ruc(&self) -> &str {
        &self.0[10..23]
    }

    /// Emission environment.
    pub fn ambiente(&self) -> Option<Ambiente> {
        Ambiente::from_code(self.0.as_bytes()[23] as char)
    }

    /// 3-digit establishment code.
    pub fn establecimiento(&self) -> &str {
        &self.0[24..27]
    }

    /// 3-digit emission point code.
    pub fn punto_emision(&self) -> &str {
        &self.0[27..30]
    }

    /// Document sequential.
    pub fn secuencial(&self) -> u64 {
        self.0[30..39].parse().expect("digits verified at construction")
    }

    /// The 8-digit random padding field.
    pub fn codigo_numerico(&self) -> u32 {
        self.0[39..47].parse().expect("digits verified at construction")
    }

    /// Emission mode.
    pub fn tipo_emision(&self) -> Option<TipoEmision> {
        TipoEmision::from_code(self.0.as_bytes()[47] as char)
    }

    /// The trailing check digit.
    pub fn digito_verificador(&self) -> u8 {
        self.0.as_bytes()[48] - b'0'
    }
}

impl fmt::Display for ClaveAcceso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClaveAcceso {
    type Err = ClaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ClaveAcceso {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClaveAcceso {
    type Error = ClaveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClaveAcceso> for String {
    fn from(clave: ClaveAcceso) -> Self {
        clave.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Generated from: 2024-12-15, factura, RUC 1790011674001, producción,
    // 001-002-000000123, código numérico 12345678, emisión normal.
    const KNOWN: &str = "1512202401179001167400120010020000001231234567816";

    #[test]
    fn parse_known_clave() {
        let clave = ClaveAcceso::parse(KNOWN).unwrap();
        assert_eq!(clave.as_str(), KNOWN);
        assert_eq!(clave.digito_verificador(), 6);
    }

    #[test]
    fn accessors_decode_fields() {
        let clave = ClaveAcceso::parse(KNOWN).unwrap();
        assert_eq!(
            clave.fecha_emision(),
            NaiveDate::from_ymd_opt(2024, 12, 15)
        );
        assert_eq!(clave.tipo(), Some(DocumentoTipo::Factura));
        assert_eq!(clave.ruc(), "1790011674001");
        assert_eq!(clave.ambiente(), Some(Ambiente::Produccion));
        assert_eq!(clave.establecimiento(), "001");
        assert_eq!(clave.punto_emision(), "002");
        assert_eq!(clave.secuencial(), 123);
        assert_eq!(clave.codigo_numerico(), 12_345_678);
        assert_eq!(clave.tipo_emision(), Some(TipoEmision::Normal));
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            ClaveAcceso::parse(""),
            Err(ClaveError::InvalidArgument { field: "clave", .. })
        ));
        assert!(ClaveAcceso::parse("   ").is_err());
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(ClaveAcceso::parse(&KNOWN[..48]).is_err());
        let long = format!("{KNOWN}0");
        assert!(ClaveAcceso::parse(&long).is_err());
    }

    #[test]
    fn non_digit_rejected() {
        let mut s = KNOWN.to_owned();
        s.replace_range(10..11, "x");
        assert!(ClaveAcceso::parse(&s).is_err());
    }

    #[test]
    fn flipped_check_digit_rejected() {
        let mut s = KNOWN.to_owned();
        s.replace_range(48..49, "7");
        assert!(!ClaveAcceso::is_valid(&s));
    }

    #[test]
    fn display_and_fromstr_roundtrip() {
        let clave: ClaveAcceso = KNOWN.parse().unwrap();
        assert_eq!(clave.to_string(), KNOWN);
    }
}
