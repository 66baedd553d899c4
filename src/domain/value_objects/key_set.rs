//! Insertion-ordered set of node keys.

use std::collections::HashMap;

/// A set of node keys that remembers insertion order
///
/// Insert, remove and membership are O(1). Each key carries an insertion
/// sequence number, and `iter` sorts by it. Tree-ordered output is produced
/// by the tree index; this order is only used for keys that no longer exist
/// in the tree.
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    members: HashMap<String, u64>,
    next_seq: u64,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key; returns true if it was not present
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.members.contains_key(&key) {
            return false;
        }
        self.members.insert(key, self.next_seq);
        self.next_seq += 1;
        true
    }

    /// Remove a key; returns true if it was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.members.remove(key).is_some()
    }

    /// Flip membership; returns the new membership
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.remove(key) {
            false
        } else {
            self.insert(key);
            true
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Keys in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered(|_| true).into_iter()
    }

    /// Keys matching `keep`, in insertion order
    ///
    /// Only the matching keys are sorted.
    pub fn ordered(&self, keep: impl Fn(&str) -> bool) -> Vec<&str> {
        let mut keys: Vec<(u64, &str)> = self
            .members
            .iter()
            .filter(|(key, _)| keep(key))
            .map(|(key, seq)| (*seq, key.as_str()))
            .collect();
        keys.sort_unstable_by_key(|(seq, _)| *seq);
        keys.into_iter().map(|(_, key)| key).collect()
    }
}

/// Two sets are equal when they hold the same keys in the same order
impl PartialEq for KeySet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for KeySet {}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for KeySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
