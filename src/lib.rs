//! # factura-ec
//!
//! Document identity primitives for Ecuadorian electronic invoicing under
//! the SRI (Servicio de Rentas Internas) regime: the 49-digit clave de
//! acceso, RUC and cédula validation, and per-emission-point document
//! sequencing.
//!
//! The formats reproduced here are legally mandated and binary-exact. A
//! clave with a wrong check digit, or a document number issued twice for
//! the same emission point, gets the comprobante rejected by the tax
//! authority — or worse, silently accepted under a duplicate identity.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use factura_ec::clave::ClaveBuilder;
//! use factura_ec::core::{Ambiente, DocumentoTipo};
//! use factura_ec::identificacion::validate_ruc;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let ruc = "1790011674001";
//! assert!(validate_ruc(ruc).is_ok());
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let clave = ClaveBuilder::new(
//!     NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
//!     DocumentoTipo::Factura,
//!     ruc,
//! )
//! .ambiente(Ambiente::Produccion)
//! .establecimiento("001")
//! .punto_emision("002")
//! .secuencial(123)
//! .generar(&mut rng)
//! .unwrap();
//!
//! assert_eq!(clave.as_str().len(), 49);
//! assert!(clave.as_str().starts_with("1512202401"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Checksum primitives, SRI code tables |
//! | [`identificacion`] | Cédula and RUC validation |
//! | [`clave`] | Clave de acceso generation and parsing |
//! | [`secuencia`] | Per-emission-point document numbering |

pub mod clave;
pub mod core;
pub mod identificacion;
pub mod secuencia;

// Re-export core types at crate root for convenience
pub use crate::core::*;
