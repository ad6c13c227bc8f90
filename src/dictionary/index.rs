// Dictionary index - in-memory lookups over a compiled dictionary
//
// Lookup strategy, first tier with ids wins:
// 1. exact variant
// 2. flexible (surface without dots/whitespace) against the exact index
// 3. normalized (only when matching case-insensitively)

use std::collections::HashMap;

use super::{CompiledDictionary, ConflictGroup, DictionaryEntry, DictionaryError};
use crate::text::normalize;

/// Lookup structures built once from a [`CompiledDictionary`]
#[derive(Debug)]
pub struct DictionaryIndex {
    /// Entries in insertion order
    entries: Vec<DictionaryEntry>,
    /// Entry id → position in `entries`
    positions: HashMap<String, usize>,
    exact: HashMap<String, Vec<String>>,
    normalized: HashMap<String, Vec<String>>,
    /// Conflict groups in dictionary order
    conflicts: Vec<ConflictGroup>,
    /// Normalized acronym key of each conflict group, parallel to `conflicts`
    normalized_conflict_keys: Vec<String>,
    /// Acronym key → position in `conflicts`
    conflict_positions: HashMap<String, usize>,
}

impl DictionaryIndex {
    /// Build the index, validating every cross reference
    ///
    /// A malformed dictionary is rejected here so lookups never have to deal
    /// with dangling ids later.
    pub fn new(dictionary: CompiledDictionary) -> Result<Self, DictionaryError> {
        let CompiledDictionary {
            version,
            entries,
            index,
            conflicts: raw_conflicts,
            ..
        } = dictionary;

        let mut positions = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if positions.insert(entry.id.clone(), pos).is_some() {
                return Err(DictionaryError::DuplicateId(entry.id.clone()));
            }
            if entry.variants.is_empty() {
                return Err(DictionaryError::EmptyVariants(entry.id.clone()));
            }
            if !entry.variants.contains(&entry.original) {
                crate::warn!(
                    "Entry {} does not list its original form '{}' among its variants",
                    entry.id,
                    entry.original
                );
            }
        }

        for (name, map) in [("exact", &index.exact), ("normalized", &index.normalized)] {
            for (key, ids) in map {
                if let Some(id) = ids.iter().find(|id| !positions.contains_key(*id)) {
                    return Err(DictionaryError::DanglingIndexReference {
                        index: name,
                        key: key.clone(),
                        id: id.clone(),
                    });
                }
            }
        }

        let mut conflicts: Vec<ConflictGroup> = Vec::with_capacity(raw_conflicts.len());
        let mut conflict_positions = HashMap::with_capacity(raw_conflicts.len());
        for group in raw_conflicts {
            validate_conflict(&group, &positions)?;

            // A repeated key replaces the earlier group but keeps its position
            match conflict_positions.get(&group.acronym_key) {
                Some(&pos) => conflicts[pos] = group,
                None => {
                    conflict_positions.insert(group.acronym_key.clone(), conflicts.len());
                    conflicts.push(group);
                }
            }
        }
        let normalized_conflict_keys = conflicts
            .iter()
            .map(|group| normalize(&group.acronym_key))
            .collect();

        crate::info!(
            "Loaded dictionary {} with {} entries, {} exact variants, {} conflicts",
            if version.is_empty() { "(unversioned)" } else { version.as_str() },
            entries.len(),
            index.exact.len(),
            conflicts.len()
        );

        Ok(Self {
            entries,
            positions,
            exact: index.exact,
            normalized: index.normalized,
            conflicts,
            normalized_conflict_keys,
            conflict_positions,
        })
    }

    /// Resolve an acronym surface form to its entry
    pub fn lookup(&self, surface: &str, case_sensitive: bool) -> Option<&DictionaryEntry> {
        if let Some(ids) = non_empty(self.exact.get(surface)) {
            return self.resolve_ids(ids, surface);
        }

        let flexible: String = surface
            .chars()
            .filter(|c| *c != '.' && !c.is_whitespace())
            .collect();
        if let Some(ids) = non_empty(self.exact.get(&flexible)) {
            return self.resolve_ids(ids, surface);
        }

        if !case_sensitive {
            if let Some(ids) = non_empty(self.normalized.get(&normalize(surface))) {
                return self.resolve_ids(ids, surface);
            }
        }

        None
    }

    /// Pick one entry out of the ids a lookup tier produced
    fn resolve_ids(&self, ids: &[String], surface: &str) -> Option<&DictionaryEntry> {
        if let [id] = ids {
            return self.get(id);
        }

        if let Some(group) = self.conflict_for(surface) {
            return self.get(&group.default_entry_id);
        }

        // Consistent dictionaries always have a group here; keep the first id
        crate::debug!(
            "No conflict group for '{}' with {} candidate entries, using {}",
            surface,
            ids.len(),
            ids[0]
        );
        self.get(&ids[0])
    }

    /// Entry by id
    pub fn get(&self, id: &str) -> Option<&DictionaryEntry> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    /// All entries in dictionary order
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// All conflict groups in dictionary order
    pub fn conflicts(&self) -> &[ConflictGroup] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Conflict group keyed by an original acronym form
    pub fn conflict(&self, original: &str) -> Option<&ConflictGroup> {
        self.conflict_positions
            .get(original)
            .map(|&pos| &self.conflicts[pos])
    }

    /// Conflict group whose key normalizes like `form`
    ///
    /// Matches every spelling of a grouped acronym ("CE", "C.E.", "c e"),
    /// whichever row's form the group is keyed by.
    pub fn conflict_for(&self, form: &str) -> Option<&ConflictGroup> {
        let key = normalize(form);
        self.normalized_conflict_keys
            .iter()
            .position(|k| *k == key)
            .map(|pos| &self.conflicts[pos])
    }

    /// Whether an original acronym form has several meanings
    pub fn has_conflict(&self, original: &str) -> bool {
        self.conflict_positions.contains_key(original)
    }

    /// Every meaning of an original acronym form
    ///
    /// Returns the single meaning when there's no conflict, and nothing when
    /// the form is unknown.
    pub fn all_meanings(&self, original: &str) -> Vec<String> {
        match self.conflict(original) {
            Some(group) => group.meanings(),
            None => self
                .lookup(original, true)
                .map(|entry| vec![entry.meaning.clone()])
                .unwrap_or_default(),
        }
    }
}

fn non_empty(ids: Option<&Vec<String>>) -> Option<&[String]> {
    ids.map(Vec::as_slice).filter(|ids| !ids.is_empty())
}

fn validate_conflict(
    group: &ConflictGroup,
    positions: &HashMap<String, usize>,
) -> Result<(), DictionaryError> {
    if group.candidates.len() < 2 {
        return Err(DictionaryError::MalformedConflict {
            acronym: group.acronym_key.clone(),
            reason: format!("{} candidate(s), at least 2 required", group.candidates.len()),
        });
    }

    if let Some(candidate) = group
        .candidates
        .iter()
        .find(|c| !positions.contains_key(&c.entry_id))
    {
        return Err(DictionaryError::DanglingConflictReference {
            acronym: group.acronym_key.clone(),
            id: candidate.entry_id.clone(),
        });
    }

    if group.default_candidate().is_none() {
        return Err(DictionaryError::MalformedConflict {
            acronym: group.acronym_key.clone(),
            reason: format!("default entry {} is not a candidate", group.default_entry_id),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
