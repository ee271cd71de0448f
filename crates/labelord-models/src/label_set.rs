use std::collections::{btree_map, BTreeMap};

use crate::Label;

/// Labels indexed by lowercase name.
///
/// Keys are always lowercase, values keep the original-case name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: BTreeMap<String, Label>,
}

impl LabelSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label, replacing any label with the same key.
    pub fn insert(&mut self, label: Label) -> Option<Label> {
        self.labels.insert(label.key(), label)
    }

    /// Get a label from its name, whatever its case.
    pub fn get(&self, name: &str) -> Option<&Label> {
        self.labels.get(&name.to_lowercase())
    }

    /// Check if a label exists, whatever its case.
    pub fn contains(&self, name: &str) -> bool {
        self.labels.contains_key(&name.to_lowercase())
    }

    /// Remove a label from its name, whatever its case.
    pub fn remove(&mut self, name: &str) -> Option<Label> {
        self.labels.remove(&name.to_lowercase())
    }

    /// Keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    /// Labels, in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.values()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<T: IntoIterator<Item = Label>>(iter: T) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl IntoIterator for LabelSet {
    type IntoIter = btree_map::IntoValues<String, Label>;
    type Item = Label;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_values()
    }
}
