//! Lookup from normalized name variants to directory records.

use std::collections::HashMap;

use crate::sleeper::types::{PlayerDirectory, PlayerRecord};

/// Normalize a name for lookup: trim surrounding whitespace, lower-case.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Keys a record is indexed under: full name, "first last", last name.
///
/// Missing or blank fields contribute nothing and a record never repeats a
/// key (e.g. when its full name equals "first last").
pub fn name_keys(record: &PlayerRecord) -> Vec<String> {
    let present = |field: &Option<String>| {
        field
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let full = present(&record.full_name);
    let first = present(&record.first_name);
    let last = present(&record.last_name);

    let mut variants = Vec::with_capacity(3);
    if let Some(full) = &full {
        variants.push(normalize_name(full));
    }
    if let (Some(first), Some(last)) = (&first, &last) {
        variants.push(format!("{} {}", first.trim(), last.trim()).to_lowercase());
    }
    if let Some(last) = &last {
        variants.push(normalize_name(last));
    }

    let mut keys: Vec<String> = Vec::with_capacity(variants.len());
    for key in variants {
        if !key.trim().is_empty() && !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// Name index over one directory snapshot.
///
/// Keys iterate in first-insertion order and each key's candidates keep the
/// directory's record order.
#[derive(Debug, Default)]
pub struct NameIndex {
    records: Vec<PlayerRecord>,
    keys: Vec<String>,
    entries: HashMap<String, Vec<usize>>,
}

impl NameIndex {
    pub fn build(records: Vec<PlayerRecord>) -> Self {
        let mut keys = Vec::new();
        let mut entries: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, record) in records.iter().enumerate() {
            for key in name_keys(record) {
                match entries.get_mut(&key) {
                    Some(list) => list.push(pos),
                    None => {
                        keys.push(key.clone());
                        entries.insert(key, vec![pos]);
                    }
                }
            }
        }

        Self {
            records,
            keys,
            entries,
        }
    }

    pub fn from_directory(directory: PlayerDirectory) -> Self {
        Self::build(directory.into_players())
    }

    /// Candidates stored under an already-normalized key.
    pub fn get(&self, key: &str) -> Option<Vec<&PlayerRecord>> {
        self.entries
            .get(key)
            .map(|positions| positions.iter().map(|&p| &self.records[p]).collect())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }
}
