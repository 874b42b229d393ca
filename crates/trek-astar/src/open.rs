//! The open set: an indexed binary min-heap of queued nodes.
//!
//! Entries are ordered by `f` ascending, then by heuristic remainder
//! ascending, then by insertion order (FIFO). A side index from element key
//! to heap slot makes membership tests and lookups O(1) on average and lets
//! a queued node be removed in O(log n).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::node::NodeId;

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    id: NodeId,
    f: f64,
    h: f64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<K> Entry<K> {
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.h.total_cmp(&other.h))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Priority queue of nodes awaiting expansion.
///
/// At most one entry exists per key; pushing a key that is already queued
/// replaces the old entry.
#[derive(Debug, Clone)]
pub struct OpenSet<K> {
    heap: Vec<Entry<K>>,
    index: HashMap<K, usize>,
    seq: u64,
}

impl<K: Eq + Hash + Clone> Default for OpenSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> OpenSet<K> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
            seq: 0,
        }
    }

    /// Queue node `id` under `key` with total estimate `f` and heuristic
    /// remainder `h`.
    pub fn push(&mut self, key: K, id: NodeId, f: f64, h: f64) {
        if self.index.contains_key(&key) {
            self.remove(&key);
        }
        let seq = self.seq;
        self.seq += 1;
        let slot = self.heap.len();
        self.index.insert(key.clone(), slot);
        self.heap.push(Entry { key, id, f, h, seq });
        self.sift_up(slot);
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.index.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.id)
    }

    /// Whether a node with this key is queued.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// The queued node equal to `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).map(|&slot| self.heap[slot].id)
    }

    /// Remove the queued node equal to `key`.
    pub fn remove(&mut self, key: &K) -> Option<NodeId> {
        let slot = self.index.remove(key)?;
        let last = self.heap.len() - 1;
        if slot != last {
            self.swap(slot, last);
        }
        let entry = self.heap.pop()?;
        if slot < self.heap.len() {
            // The entry moved into `slot` may belong above or below it.
            self.sift_up(slot);
            self.sift_down(slot);
        }
        Some(entry.id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        for slot in [a, b] {
            if let Some(i) = self.index.get_mut(&self.heap[slot].key) {
                *i = slot;
            }
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].cmp_priority(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].cmp_priority(&self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.heap[right].cmp_priority(&self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
