//! First-seen-order slot allocation.
//!
//! Mesh consolidation needs the same small mapping twice per node: vertex
//! value → vertex buffer index, and material name → material slot. The
//! first lookup of an unseen key assigns the next sequential index; every
//! later lookup returns the same one.

use std::collections::HashMap;
use std::hash::Hash;

use cgmath::Vector3;

/// Assigns stable, sequential indices to keys in first-seen order.
///
/// Write-once and append-only: there is no removal, and a key's index never
/// changes. One index lives for a single mesh build.
#[derive(Debug)]
pub(crate) struct DedupIndex<K> {
    slots: HashMap<K, usize>,
    keys: Vec<K>,
}

impl<K: Eq + Hash + Clone> DedupIndex<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            keys: Vec::new(),
        }
    }

    /// Get the index assigned to `key`, allocating the next one on first use.
    pub(crate) fn slot(&mut self, key: K) -> usize {
        if let Some(&index) = self.slots.get(&key) {
            return index;
        }
        let index = self.keys.len();
        self.keys.push(key.clone());
        self.slots.insert(key, index);
        index
    }

    /// Number of distinct keys seen.
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in slot order, i.e. first-seen order.
    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }
}

/// Exact-value vertex identity for deduplication.
///
/// Keyed on the raw bit patterns, so two vertices collapse only when their
/// coordinates match exactly. No tolerance is applied; `-0.0` and `0.0`
/// stay distinct.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct VertexKey([u32; 3]);

impl From<Vector3<f32>> for VertexKey {
    fn from(v: Vector3<f32>) -> Self {
        Self([v.x.to_bits(), v.y.to_bits(), v.z.to_bits()])
    }
}
