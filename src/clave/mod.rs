//! Clave de acceso — the 49-digit comprobante access key.
//!
//! Field layout, left to right, fixed widths:
//!
//! | Field | Width |
//! |-------|-------|
//! | Issue date `DDMMYYYY` | 8 |
//! | Comprobante type code | 2 |
//! | Issuer RUC | 13 |
//! | Ambiente | 1 |
//! | Establecimiento | 3 |
//! | Punto de emisión | 3 |
//! | Secuencial | 9 |
//! | Código numérico (random) | 8 |
//! | Tipo de emisión | 1 |
//! | Modulo-11 check digit | 1 |
//!
//! The check digit weights cycle 2..=7 starting from the rightmost
//! payload digit.

mod acceso;
mod builder;

use thiserror::Error;

pub use acceso::ClaveAcceso;
pub use builder::ClaveBuilder;

/// Errors from clave de acceso generation and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClaveError {
    /// An argument violated its shape contract. Generation arguments
    /// are expected to be pre-validated by the caller; parse failures
    /// name the `clave` field itself.
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// The offending parameter.
        field: &'static str,
        /// What the contract required.
        reason: String,
    },
}

impl ClaveError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}
