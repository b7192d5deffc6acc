//! Dense surrogate key assignment.
//!
//! A `Registry` hands each distinct key the index of its first insertion,
//! starting at 0. Later writes under the same key never move it, so ids stay
//! stable whichever write policy the entity uses.

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct Registry<K, V = ()> {
    entries: IndexMap<K, V>,
}

fn to_id(index: usize) -> i64 {
    index as i64
}

impl<K: Hash + Eq, V> Registry<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert unless the key is already present; the first value wins
    pub fn insert_first(&mut self, key: K, value: V) -> i64 {
        let entry = self.entries.entry(key);
        let id = to_id(entry.index());
        entry.or_insert(value);
        id
    }

    /// Insert or overwrite the value; the id of an existing key is kept
    pub fn insert_last(&mut self, key: K, value: V) -> i64 {
        let (index, _) = self.entries.insert_full(key, value);
        to_id(index)
    }

    /// Mutable access to the value under `key`, creating it on first sight
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> (i64, &mut V) {
        let entry = self.entries.entry(key);
        let id = to_id(entry.index());
        (id, entry.or_insert_with(make))
    }

    pub fn id_of<Q>(&self, key: &Q) -> Option<i64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_index_of(key).map(to_id)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<(i64, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .get_full(key)
            .map(|(index, _, value)| (to_id(index), value))
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &K, &V)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, (key, value))| (to_id(index), key, value))
    }
}

impl<K: Hash + Eq> Registry<K, ()> {
    /// Assign (or look up) the id of a bare name
    pub fn intern(&mut self, key: K) -> i64 {
        self.insert_first(key, ())
    }
}

impl<K: Hash + Eq, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
