//! Reference list of disallowed ("no-go") ingredients.
//!
//! Each entry keeps the name as authored for display, and is keyed by its
//! normalized form for lookup. The list is built once and then only read;
//! share it between threads behind an `Arc`.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_name;

/// Category used when a reference row has no category column.
pub const DEFAULT_CATEGORY: &str = "Unknown";

/// One disallowed ingredient definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Name as it appears in the source list.
    pub original_name: String,
    /// Lookup key (see [`normalize_name`]).
    pub normalized_name: String,
    /// Grouping label, e.g. "Sweeteners".
    pub category: String,
}

impl ReferenceEntry {
    pub fn new(original_name: impl Into<String>, category: impl Into<String>) -> Self {
        let original_name = original_name.into();
        let normalized_name = normalize_name(&original_name);
        Self {
            original_name,
            normalized_name,
            category: category.into(),
        }
    }
}

/// Normalized-name keyed lookup of reference entries.
#[derive(Debug, Clone, Default)]
pub struct NoGoList {
    entries: HashMap<String, ReferenceEntry>,
    /// Source description (usually the file name).
    pub source: Option<String>,
}

impl NoGoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any entry with the same normalized name.
    ///
    /// Returns the replaced entry, if any.
    pub fn insert(&mut self, entry: ReferenceEntry) -> Option<ReferenceEntry> {
        self.entries.insert(entry.normalized_name.clone(), entry)
    }

    /// Look up an entry by an already normalized key.
    pub fn get(&self, normalized: &str) -> Option<&ReferenceEntry> {
        self.entries.get(normalized)
    }

    /// Normalize `text` and look it up.
    pub fn lookup(&self, text: &str) -> Option<&ReferenceEntry> {
        self.entries.get(&normalize_name(text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by category, then original name.
    ///
    /// With `Some(category)` only entries in that category (compared
    /// case-insensitively) are returned.
    pub fn sorted_entries(&self, category: Option<&str>) -> Vec<&ReferenceEntry> {
        let mut entries: Vec<&ReferenceEntry> = self.in_category(category).collect();
        entries.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.original_name.cmp(&b.original_name))
        });
        entries
    }

    /// Number of entries per category, restricted like [`Self::sorted_entries`].
    pub fn category_counts(&self, category: Option<&str>) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.in_category(category) {
            *counts.entry(entry.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    fn in_category<'a>(
        &'a self,
        category: Option<&str>,
    ) -> impl Iterator<Item = &'a ReferenceEntry> {
        self.entries.values().filter(move |entry| {
            category.is_none_or(|wanted| entry.category.eq_ignore_ascii_case(wanted))
        })
    }
}

impl FromIterator<ReferenceEntry> for NoGoList {
    fn from_iter<I: IntoIterator<Item = ReferenceEntry>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.insert(entry);
        }
        list
    }
}
