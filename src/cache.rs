//! Per-call caches used by the memoized and tabulated evaluators.
//!
//! Both caches are created empty at the start of one evaluation and dropped
//! at its end. An unfilled entry is `None`, never a sentinel value, so a
//! legitimately computed zero is never mistaken for "not yet computed".

use std::collections::HashMap;
use std::hash::Hash;

/// Lazily built cache keyed by the full state tuple.
#[derive(Debug, Clone)]
pub struct MemoCache<S, V> {
    entries: HashMap<S, V>,
}

impl<S: Eq + Hash, V: Clone> MemoCache<S, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, state: &S) -> Option<&V> {
        self.entries.get(state)
    }

    /// Store a computed value. A state is stored at most once per evaluation.
    #[inline]
    pub fn insert(&mut self, state: S, value: V) {
        let previous = self.entries.insert(state, value);
        debug_assert!(previous.is_none(), "state evaluated twice");
    }

    /// Number of states cached so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Eq + Hash, V: Clone> Default for MemoCache<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Dense table sized to the full coordinate range of a state space.
#[derive(Debug, Clone)]
pub struct DenseTable<V> {
    slots: Vec<Option<V>>,
}

impl<V: Clone> DenseTable<V> {
    /// Allocate `len` unfilled slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<&V> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Fill a slot.
    ///
    /// # Panics
    /// Panics if `slot` is outside the table.
    #[inline]
    pub fn fill(&mut self, slot: usize, value: V) {
        let len = self.slots.len();
        match self.slots.get_mut(slot) {
            Some(entry) => *entry = Some(value),
            None => panic!("slot {slot} outside table of length {len}"),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a value.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{DenseTable, MemoCache};

    #[test]
    fn zero_value_is_distinct_from_unset() {
        let mut table = DenseTable::new(3);
        assert_eq!(table.get(1), None);
        table.fill(1, 0u64);
        assert_eq!(table.get(1), Some(&0));
        assert_eq!(table.filled(), 1);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn out_of_range_get_is_none() {
        let table: DenseTable<u8> = DenseTable::new(0);
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }

    #[test]
    #[should_panic]
    fn fill_outside_table_panics() {
        let mut table = DenseTable::new(2);
        table.fill(2, 1u32);
    }

    #[test]
    fn memo_cache_keys_by_full_state() {
        let mut cache = MemoCache::new();
        assert!(cache.is_empty());
        cache.insert((1usize, -3i64), 0u64);
        cache.insert((1usize, 3i64), 2u64);
        assert_eq!(cache.get(&(1, -3)), Some(&0));
        assert_eq!(cache.get(&(1, 3)), Some(&2));
        assert_eq!(cache.get(&(0, 3)), None);
        assert_eq!(cache.len(), 2);
    }
}
