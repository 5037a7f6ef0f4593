//! Key interning for dense vertex ids.
//!
//! Maps caller keys to integer ids assigned in insertion order, and back.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

use crate::graph::VertexId;

/// Bijection between keys and dense integer ids.
#[derive(Debug, Clone)]
pub struct KeyInterner<K> {
    to_id: FxHashMap<K, VertexId>,
    from_id: Vec<K>,
}

impl<K: Eq + Hash + Clone> KeyInterner<K> {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_id: Vec::with_capacity(capacity),
        }
    }

    /// Intern a key, returning its id.
    /// If already interned, returns the existing id.
    pub fn intern(&mut self, key: K) -> VertexId {
        if let Some(&id) = self.to_id.get(&key) {
            return id;
        }
        let id = self.from_id.len();
        self.from_id.push(key.clone());
        self.to_id.insert(key, id);
        id
    }

    /// Get the id for a key, if it exists.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<VertexId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.to_id.get(key).copied()
    }

    /// Get the key for an id.
    #[inline]
    pub fn resolve(&self, id: VertexId) -> Option<&K> {
        self.from_id.get(id)
    }

    /// All keys in id order.
    pub fn keys(&self) -> std::slice::Iter<'_, K> {
        self.from_id.iter()
    }

    /// Number of interned keys.
    pub fn len(&self) -> usize {
        self.from_id.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.from_id.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for KeyInterner<K> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
