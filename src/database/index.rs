//! Designation and name indexes over the NEO arena

use std::collections::HashMap;

use crate::model::{NearEarthObject, NeoId};

/// Result of indexing one NEO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexOutcome {
    /// Earlier NEO displaced from the designation index, if any
    pub replaced_designation: Option<NeoId>,
    /// Earlier NEO displaced from the name index, if any
    pub replaced_name: Option<NeoId>,
}

/// Hash indexes mapping designation and name to an NEO handle.
///
/// Keys are matched exactly (case-sensitive, no trimming). Inserting a
/// key that is already present replaces the earlier handle.
#[derive(Debug, Default)]
pub struct NeoIndex {
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
}

impl NeoIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_designation: HashMap::with_capacity(capacity),
            by_name: HashMap::new(),
        }
    }

    /// Indexes a single NEO under its designation and, if set, its name
    pub fn insert(&mut self, id: NeoId, neo: &NearEarthObject) -> IndexOutcome {
        let replaced_designation = self
            .by_designation
            .insert(neo.designation().to_string(), id);

        let replaced_name = match neo.name() {
            Some(name) => self.by_name.insert(name.to_string(), id),
            None => None,
        };

        IndexOutcome {
            replaced_designation,
            replaced_name,
        }
    }

    /// Removes `name` only if it still maps to `id`. Returns true if removed.
    pub fn remove_name(&mut self, name: &str, id: NeoId) -> bool {
        if self.by_name.get(name) == Some(&id) {
            self.by_name.remove(name);
            true
        } else {
            false
        }
    }

    pub fn lookup_designation(&self, designation: &str) -> Option<NeoId> {
        self.by_designation.get(designation).copied()
    }

    pub fn lookup_name(&self, name: &str) -> Option<NeoId> {
        self.by_name.get(name).copied()
    }

    /// Number of distinct designations indexed
    pub fn len(&self) -> usize {
        self.by_designation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_designation.is_empty()
    }
}
