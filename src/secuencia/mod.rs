//! Per-emission-point document numbering.
//!
//! Every emission point keeps an independent monotonic counter per
//! comprobante kind. A sequential, once handed out, is never handed out
//! again for the same scope — gaps are tolerated (a rolled-back save,
//! a voided document), duplicates are not. The counter lives in durable
//! storage behind the [`SequentialStore`] seam; this module supplies
//! the sequencer on top of it, the legal `NNN-NNN-NNNNNNNNN` number
//! format, and an in-process store for tests and single-node use.

mod numero;
mod punto;
mod sequencer;
mod store;

pub use numero::{format_numero, parse_numero};
pub use punto::PuntoEmision;
pub use sequencer::DocumentSequencer;
pub use store::{MemorySequentialStore, SequenceError, SequenceScope, SequentialStore};
