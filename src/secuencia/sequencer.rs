use crate::core::DocumentoTipo;

use super::numero::format_numero;
use super::store::{SequenceError, SequenceScope, SequentialStore};

/// Allocates document sequentials against a durable counter store.
///
/// The sequencer itself holds no counter state — every reservation goes
/// through the store's atomic increment, so multiple service instances
/// sharing one store never diverge.
#[derive(Debug)]
pub struct DocumentSequencer<S: SequentialStore> {
    store: S,
}

impl<S: SequentialStore> DocumentSequencer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reserve the next sequential for `(scope, tipo)`. Returns a value
    /// ≥ 1 that will never be returned again for this scope.
    ///
    /// Gaps appear when a reservation's enclosing document save rolls
    /// back or a document is voided; that is accepted — numbers are
    /// never reused to fill them.
    pub fn reserve_next(
        &self,
        scope: &SequenceScope,
        tipo: DocumentoTipo,
    ) -> Result<u64, SequenceError> {
        self.store.reserve_next(scope, tipo)
    }

    /// Reserve the next sequential and format the legal document number
    /// for the given establishment and emission point codes.
    pub fn reserve_numero(
        &self,
        scope: &SequenceScope,
        tipo: DocumentoTipo,
        establecimiento: u16,
        punto_emision: u16,
    ) -> Result<(u64, String), SequenceError> {
        let secuencial = self.store.reserve_next(scope, tipo)?;
        Ok((
            secuencial,
            format_numero(establecimiento, punto_emision, secuencial),
        ))
    }

    /// Last reserved sequential, for display (0 when nothing has been
    /// reserved). Never use this to number a document — that is what
    /// [`reserve_next`](Self::reserve_next) is for.
    pub fn peek_current(
        &self,
        scope: &SequenceScope,
        tipo: DocumentoTipo,
    ) -> Result<u64, SequenceError> {
        self.store.current(scope, tipo)
    }

    /// Access the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
