//! In-memory registries keyed by correlation identifier
//!
//! The gateway owns two of these: one holding submitted requests, one
//! holding consumed quotes. Both share the same contract — unconditional
//! last-write-wins `put`, non-blocking `get`, snapshot `list_all` — so the
//! store is generic over the entry type.
//!
//! Backed by `DashMap`: per-key atomic put/get under arbitrarily many
//! concurrent callers, no global lock, no ordering guarantee across
//! different identifiers. Entries live for the process lifetime; nothing
//! evicts them.

use dashmap::DashMap;
use types::ids::RequestId;

/// Concurrent map from correlation identifier to a stored entry
pub struct Registry<V> {
    entries: DashMap<RequestId, V>,
}

impl<V: Clone> Registry<V> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert unconditionally; an existing entry for `id` is overwritten
    ///
    /// Uniqueness is the identifier generator's job, not this layer's.
    pub fn put(&self, id: RequestId, value: V) {
        self.entries.insert(id, value);
    }

    /// Non-blocking lookup; `None` is a normal outcome, not an error
    pub fn get(&self, id: &RequestId) -> Option<V> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Snapshot of all entries, iteration order unspecified
    ///
    /// Debug enumeration only.
    pub fn list_all(&self) -> Vec<(RequestId, V)> {
        self.entries
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}
