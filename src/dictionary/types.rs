// Compiled dictionary data model and dictionary errors
//
// The JSON layout matches the compiled `dictionary.json` produced by the
// build step; Spanish key names are accepted as aliases on input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One (acronym form, meaning) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Unique stable identifier (e.g. "entry-042")
    pub id: String,
    /// Canonical surface form as authored (may contain dots and spaces)
    pub original: String,
    /// Human readable expansion, without trailing period
    #[serde(alias = "significado")]
    pub meaning: String,
    /// Every surface form that should match this entry, including `original`
    pub variants: Vec<String>,
    /// Higher wins when several entries share a normalized acronym
    pub priority: i32,
}

/// A candidate meaning inside a conflict group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConflictCandidate {
    #[serde(alias = "id")]
    pub entry_id: String,
    #[serde(alias = "significado")]
    pub meaning: String,
    pub priority: i32,
}

/// All the entries sharing one normalized acronym with different meanings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConflictGroup {
    /// Original surface form used as the group key
    #[serde(alias = "sigla")]
    pub acronym_key: String,
    /// Candidates sorted by descending priority
    #[serde(alias = "variants")]
    pub candidates: Vec<ConflictCandidate>,
    /// Entry picked when duplicates are auto-resolved
    #[serde(alias = "defaultId")]
    pub default_entry_id: String,
}

impl ConflictGroup {
    /// Candidate for the default entry, if the group is well formed
    pub fn default_candidate(&self) -> Option<&ConflictCandidate> {
        self.candidates
            .iter()
            .find(|c| c.entry_id == self.default_entry_id)
    }

    /// Meanings of every candidate, in priority order
    pub fn meanings(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.meaning.clone()).collect()
    }
}

/// Precomputed variant lookups
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantIndex {
    /// Variant as written → entry ids
    pub exact: HashMap<String, Vec<String>>,
    /// Normalized variant → entry ids
    pub normalized: HashMap<String, Vec<String>>,
}

/// Immutable dictionary produced by the build step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompiledDictionary {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub build_date: String,
    pub entries: Vec<DictionaryEntry>,
    pub index: VariantIndex,
    #[serde(default)]
    pub conflicts: Vec<ConflictGroup>,
}

/// Error types for dictionary loading and validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// Two entries share the same id
    #[error("Entry with ID {0} already exists")]
    DuplicateId(String),
    /// Entry without any variant to match
    #[error("Entry with ID {0} has no variants")]
    EmptyVariants(String),
    /// A variant index points at an entry that doesn't exist
    #[error("Index '{index}' maps '{key}' to unknown entry {id}")]
    DanglingIndexReference {
        index: &'static str,
        key: String,
        id: String,
    },
    /// A conflict group points at an entry that doesn't exist
    #[error("Conflict '{acronym}' references unknown entry {id}")]
    DanglingConflictReference { acronym: String, id: String },
    /// A conflict group violating its own invariants
    #[error("Conflict '{acronym}' is malformed: {reason}")]
    MalformedConflict { acronym: String, reason: String },
    /// The variant automaton could not be built
    #[error("Failed to compile variant pattern: {0}")]
    PatternError(String),
    /// Failed to persist a compiled dictionary
    #[error("Failed to persist dictionary: {0}")]
    PersistenceError(String),
    /// Failed to load a compiled dictionary or its source rows
    #[error("Failed to load dictionary: {0}")]
    LoadError(String),
}
