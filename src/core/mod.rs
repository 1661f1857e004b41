//! Checksum primitives and SRI code tables.
//!
//! Everything above this module — the cédula and RUC validators, the
//! clave de acceso check digit — is built from the two checksum
//! functions defined here.

pub mod checksum;
mod types;

pub use checksum::{modulo10, modulo11};
pub use types::*;
