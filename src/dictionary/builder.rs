// Dictionary builder - compiles raw (acronym, meaning) rows into a CompiledDictionary
//
// Mirrors the build-time step: clean rows, group duplicates, assign priorities,
// generate matching variants, and precompute the exact/normalized indices and
// the conflict table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{
    CompiledDictionary, ConflictCandidate, ConflictGroup, DictionaryEntry, DictionaryError,
    VariantIndex,
};
use crate::text::normalize;

/// Version stamped on dictionaries compiled by this builder
pub const DICTIONARY_VERSION: &str = "1.0.0";

/// Rows shipped with the crate
const BUNDLED_ROWS: &str = include_str!("../../data/siglas.json");

/// Priorities for known duplicates, overriding the computed ones
///
/// A priority of 0 removes the row from the compiled dictionary.
const MANUAL_PRIORITIES: &[(&str, &str, i32)] = &[
    ("IVTM", "Impuesto sobre vehículos de tracción mecánica", 100),
    ("IVTM", "Iimpuesto sobre vehículos de tracción mecánica", 100),
    ("IVTM", "Impuesto de Arrendamientos Urbanos", 0),
    ("DGT", "Dirección General de Tributos", 90),
    ("DGT", "Dirección General de Tráfico", 90),
    ("CE", "Constitución Española", 100),
    ("CE", "Comunidad Europea", 80),
    ("cfr.", "confróntese", 100),
    ("cfr.", "Confrontar", 95),
    ("DUA", "Documento Unico Aduanero", 100),
    ("DUA", "documento único administrativo", 90),
];

/// A raw dictionary row as authored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceRow {
    #[serde(alias = "sigla", alias = "siglas", alias = "SIGLAS")]
    pub acronym: String,
    #[serde(alias = "significado", alias = "SIGNIFICADO")]
    pub meaning: String,
}

/// Builder that turns source rows into a [`CompiledDictionary`]
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    rows: Vec<SourceRow>,
    priorities: HashMap<(String, String), i32>,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    /// Create an empty builder with the built-in manual priorities
    pub fn new() -> Self {
        let priorities = MANUAL_PRIORITIES
            .iter()
            .map(|(acronym, meaning, priority)| {
                ((acronym.to_string(), meaning.to_string()), *priority)
            })
            .collect();
        Self {
            rows: Vec::new(),
            priorities,
        }
    }

    /// Builder preloaded with the rows bundled in the crate
    pub fn bundled() -> Result<Self, DictionaryError> {
        Self::new().rows_from_json(BUNDLED_ROWS)
    }

    /// Add a single row
    pub fn row(mut self, acronym: impl Into<String>, meaning: impl Into<String>) -> Self {
        self.rows.push(SourceRow {
            acronym: acronym.into(),
            meaning: meaning.into(),
        });
        self
    }

    /// Add rows parsed from a JSON array of `{acronym, meaning}` objects
    pub fn rows_from_json(mut self, json: &str) -> Result<Self, DictionaryError> {
        let rows: Vec<SourceRow> =
            serde_json::from_str(json).map_err(|e| DictionaryError::LoadError(e.to_string()))?;
        self.rows.extend(rows);
        Ok(self)
    }

    /// Force the priority of one (acronym, meaning) pair
    ///
    /// Matching is done on the cleaned acronym and meaning.
    pub fn priority(
        mut self,
        acronym: impl Into<String>,
        meaning: impl Into<String>,
        priority: i32,
    ) -> Self {
        self.priorities
            .insert((acronym.into(), meaning.into()), priority);
        self
    }

    /// Compile the rows
    pub fn build(&self) -> CompiledDictionary {
        // Group by duplication key, keeping first-seen order
        let mut groups: Vec<Vec<(String, String)>> = Vec::new();
        let mut group_positions: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for row in &self.rows {
            let (Some(acronym), Some(meaning)) =
                (clean_acronym(&row.acronym), clean_meaning(&row.meaning))
            else {
                skipped += 1;
                continue;
            };

            let key = duplication_key(&acronym);
            let pos = *group_positions.entry(key).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });

            let group = &mut groups[pos];
            if !group.iter().any(|(a, m)| *a == acronym && *m == meaning) {
                group.push((acronym, meaning));
            }
        }

        if skipped > 0 {
            crate::debug!("Skipped {} dictionary rows with empty fields", skipped);
        }

        let mut entries = Vec::new();
        let mut conflicts = Vec::new();
        let mut index = VariantIndex::default();
        let mut next_id = 1usize;

        for group in &groups {
            let mut candidates = Vec::new();

            for (original, meaning) in group {
                let id = format!("entry-{:03}", next_id);
                next_id += 1;

                let priority = self
                    .priorities
                    .get(&(original.clone(), meaning.clone()))
                    .copied()
                    .unwrap_or_else(|| calculate_priority(original, meaning));

                if priority == 0 {
                    crate::debug!("Dropping '{}' = '{}' (priority 0)", original, meaning);
                    continue;
                }

                let variants = generate_variants(original);
                for variant in &variants {
                    index
                        .exact
                        .entry(variant.clone())
                        .or_default()
                        .push(id.clone());

                    // Several variants of one entry share a normalized form
                    let ids = index.normalized.entry(normalize(variant)).or_default();
                    if !ids.contains(&id) {
                        ids.push(id.clone());
                    }
                }

                if group.len() > 1 {
                    candidates.push(ConflictCandidate {
                        entry_id: id.clone(),
                        meaning: meaning.clone(),
                        priority,
                    });
                }

                entries.push(DictionaryEntry {
                    id,
                    original: original.clone(),
                    meaning: meaning.clone(),
                    variants,
                    priority,
                });
            }

            if candidates.len() > 1 {
                // Stable: equal priorities keep source order
                candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
                let default_entry_id = candidates[0].entry_id.clone();
                conflicts.push(ConflictGroup {
                    acronym_key: group[0].0.clone(),
                    candidates,
                    default_entry_id,
                });
            }
        }

        crate::debug!(
            "Compiled {} entries ({} conflicts) from {} rows",
            entries.len(),
            conflicts.len(),
            self.rows.len()
        );

        CompiledDictionary {
            version: DICTIONARY_VERSION.to_string(),
            build_date: chrono::Utc::now().to_rfc3339(),
            entries,
            index,
            conflicts,
        }
    }
}

/// Trim and collapse whitespace; `None` when nothing is left
fn clean_acronym(raw: &str) -> Option<String> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Same as [`clean_acronym`], also dropping one trailing period
fn clean_meaning(raw: &str) -> Option<String> {
    let mut cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.ends_with('.') {
        cleaned.pop();
    }
    let cleaned = cleaned.trim_end().to_string();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Grouping key for duplicate detection; slashes stay distinct
fn duplication_key(acronym: &str) -> String {
    normalize(acronym).replace('/', "-")
}

/// Heuristic priority for an entry without a manual override
pub(crate) fn calculate_priority(acronym: &str, meaning: &str) -> i32 {
    let mut priority = 100;

    let meaning_len = meaning.chars().count();
    if meaning_len < 50 {
        priority += 10;
    }
    if meaning_len > 150 {
        priority -= 10;
    }

    if !acronym.contains(['/', '\\']) {
        priority += 5;
    }

    if acronym == acronym.to_uppercase() && acronym.chars().count() > 1 {
        priority += 5;
    }

    if meaning.contains("Impuesto") {
        priority += 15;
    }
    if meaning.contains("Ley") {
        priority += 10;
    }
    if meaning.contains("Reglamento") {
        priority += 10;
    }
    if meaning.contains("Real Decreto Legislativo") {
        priority -= 5;
    }

    priority
}

/// Every surface form that should match an acronym
///
/// The original always comes first; the result has no duplicates.
pub(crate) fn generate_variants(acronym: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    let mut add = |variant: String| {
        if !variant.is_empty() && !variants.contains(&variant) {
            variants.push(variant);
        }
    };

    add(acronym.to_string());

    // "art." -> "art"
    if let Some(stripped) = acronym.strip_suffix('.') {
        add(stripped.to_string());
    }

    // "A.E.A.T." -> "AEAT"
    if acronym.contains('.') {
        add(acronym.replace('.', ""));
    }

    // "II. EE." -> "II.EE." and "IIEE"
    if acronym.contains(' ') {
        let without_spaces: String = acronym.chars().filter(|c| !c.is_whitespace()).collect();
        let without_dots = without_spaces.replace('.', "");
        add(without_spaces);
        add(without_dots);
    }

    // "AT/EP" -> "ATEP"; "CCom./CCo." -> both halves
    if acronym.contains('/') {
        add(acronym.replace('/', ""));

        let parts: Vec<&str> = acronym.split('/').map(str::trim).collect();
        if let [first, second] = parts.as_slice() {
            if first.chars().count() > 1 && second.chars().count() > 1 {
                add(first.to_string());
                add(second.to_string());
            }
        }
    }

    // "art." -> "ART." and "ART"
    if acronym == acronym.to_lowercase() && acronym.contains('.') {
        let upper = acronym.to_uppercase();
        if let Some(stripped) = upper.strip_suffix('.') {
            add(stripped.to_string());
        }
        add(upper);
    }

    // "AEAT" -> "aeat" and "A.E.A.T."
    let compact: String = acronym
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect();
    if !compact.is_empty() && compact.chars().all(char::is_uppercase) {
        let letters = compact.chars().count();
        if (3..=6).contains(&letters) {
            add(compact.to_lowercase());
        }
        if (2..=6).contains(&letters) {
            add(compact.chars().map(|c| format!("{}.", c)).collect());
        }
    }

    variants
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
