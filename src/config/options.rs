// Expansion options
//
// `ExpansionOptions` is what callers pass, every field optional.
// `ResolvedOptions` is what the scanner sees, every field populated.
// Precedence per field: local override > global default > built-in default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Output format used when nothing else is configured
pub const DEFAULT_FORMAT: &str = "plain";

/// Per-call overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionOptions {
    /// Name of a registered formatter ("plain", "html", "structured", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Expand even when expansion is globally disabled (or skip when false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_expansion: Option<bool>,
    /// Match case-sensitively and keep the surface form in the output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_case: Option<bool>,
    /// Use the highest-priority meaning for ambiguous acronyms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_resolve_duplicates: Option<bool>,
    /// Acronym → meaning to use for ambiguous acronyms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_resolution: Option<BTreeMap<String, String>>,
    /// Only expand the first occurrence of each acronym
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_only_first: Option<bool>,
    /// Acronyms never to expand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    /// When non-empty, the only acronyms to expand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

impl ExpansionOptions {
    /// Options selecting a given output format
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            ..Self::default()
        }
    }
}

/// Fully populated options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub format: String,
    /// Only consulted when deciding whether to expand at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_expansion: Option<bool>,
    pub preserve_case: bool,
    pub auto_resolve_duplicates: bool,
    pub duplicate_resolution: BTreeMap<String, String>,
    pub expand_only_first: bool,
    pub exclude: Vec<String>,
    /// `None` and an empty list both mean "no include filter"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            force_expansion: None,
            preserve_case: true,
            auto_resolve_duplicates: false,
            duplicate_resolution: BTreeMap::new(),
            expand_only_first: false,
            exclude: Vec::new(),
            include: None,
        }
    }
}

impl ResolvedOptions {
    /// Overlay the fields set in `overrides`, keeping ours for the rest
    pub fn merge(&self, overrides: &ExpansionOptions) -> Self {
        Self {
            format: overrides
                .format
                .clone()
                .unwrap_or_else(|| self.format.clone()),
            force_expansion: overrides.force_expansion.or(self.force_expansion),
            preserve_case: overrides.preserve_case.unwrap_or(self.preserve_case),
            auto_resolve_duplicates: overrides
                .auto_resolve_duplicates
                .unwrap_or(self.auto_resolve_duplicates),
            duplicate_resolution: overrides
                .duplicate_resolution
                .clone()
                .unwrap_or_else(|| self.duplicate_resolution.clone()),
            expand_only_first: overrides.expand_only_first.unwrap_or(self.expand_only_first),
            exclude: overrides
                .exclude
                .clone()
                .unwrap_or_else(|| self.exclude.clone()),
            include: overrides.include.clone().or_else(|| self.include.clone()),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
