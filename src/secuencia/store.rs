use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::DocumentoTipo;

/// Errors from the durable counter store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SequenceError {
    /// The backing store failed. Retry policy belongs to the enclosing
    /// transaction, not this crate.
    #[error("sequence store error: {0}")]
    Store(String),
}

/// Scope of one independent document counter: a tenant's emission
/// point. Together with a [`DocumentoTipo`] it names exactly one
/// counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceScope {
    /// Owning tenant.
    pub tenant_id: String,
    /// Emission point within the tenant.
    pub emission_point_id: String,
}

impl SequenceScope {
    pub fn new(tenant_id: impl Into<String>, emission_point_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            emission_point_id: emission_point_id.into(),
        }
    }
}

/// Atomic counter storage backing [`DocumentSequencer`](super::DocumentSequencer).
///
/// `reserve_next` must behave as one indivisible increment-and-fetch
/// per `(scope, tipo)`: concurrent callers each observe a distinct
/// value and the stored counter never moves backwards. Counters for
/// different scopes or kinds must not contend. Database-backed
/// implementations typically map this to an `UPDATE ... RETURNING`
/// under row-level locking, enlisted in the document-creation unit of
/// work so a rolled-back save also rolls the counter back.
pub trait SequentialStore: Send + Sync {
    /// Atomically increment the counter for `(scope, tipo)` and return
    /// the new value. The first reservation of a scope returns 1.
    fn reserve_next(
        &self,
        scope: &SequenceScope,
        tipo: DocumentoTipo,
    ) -> Result<u64, SequenceError>;

    /// Read the last reserved value without advancing it (0 when the
    /// scope has never reserved). Display only — never a source of
    /// document numbers.
    fn current(
        &self,
        scope: &SequenceScope,
        tipo: DocumentoTipo,
    ) -> Result<u64, SequenceError>;
}

/// In-process [`SequentialStore`] backed by a mutex-guarded map.
///
/// The lock makes the read-increment pair indivisible, which satisfies
/// the trait contract for a single process. Multi-instance deployments
/// must back the trait with their database instead — an in-memory
/// counter cannot see reservations made by another instance.
#[derive(Debug, Default)]
pub struct MemorySequentialStore {
    counters: Mutex<HashMap<(SequenceScope, DocumentoTipo), u64>>,
}

impl MemorySequentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequentialStore for MemorySequentialStore {
    fn reserve_next(
        &self,
        scope: &SequenceScope,
        tipo: DocumentoTipo,
    ) -> Result<u64, SequenceError> {
        let mut counters = self
            .counters
            .lock()
            .map_err(|_| SequenceError::Store("counter map poisoned".into()))?;
        let counter = counters.entry((scope.clone(), tipo)).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    fn current(
        &self,
        scope: &SequenceScope,
        tipo: DocumentoTipo,
    ) -> Result<u64, SequenceError> {
        let counters = self
            .counters
            .lock()
            .map_err(|_| SequenceError::Store("counter map poisoned".into()))?;
        Ok(counters
            .get(&(scope.clone(), tipo))
            .copied()
            .unwrap_or(0))
    }
}
