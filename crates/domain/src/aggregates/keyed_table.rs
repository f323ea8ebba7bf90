//! Records keyed by string, iterated in first-insertion order

use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Overwriting a key replaces the value and keeps its position.
#[derive(Debug, Clone)]
pub(crate) struct KeyedTable<K, V> {
    index: BTreeMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for KeyedTable<K, V> {
    fn default() -> Self {
        Self {
            index: BTreeMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Ord + Clone + Borrow<str>, V> KeyedTable<K, V> {
    pub fn insert(&mut self, key: K, value: V) {
        match self.index.get(key.borrow()) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(key.borrow()) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, make()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
    }
}
