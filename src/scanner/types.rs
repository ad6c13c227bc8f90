// Scanner result types

use serde::{Deserialize, Serialize};

use crate::text::SpecialContext;

/// Why a candidate span was not expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OmissionReason {
    Excluded,
    NotInInclude,
    ExpandOnlyFirst,
    AmbiguousUnresolved,
    InsideUrl,
    InsideEmail,
    InsideCodeBlock,
    InsideInlineCode,
    NotFound,
}

impl OmissionReason {
    /// Stable string form, as used in diagnostic output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excluded => "excluded",
            Self::NotInInclude => "not-in-include",
            Self::ExpandOnlyFirst => "expand-only-first",
            Self::AmbiguousUnresolved => "ambiguous-unresolved",
            Self::InsideUrl => "inside-url",
            Self::InsideEmail => "inside-email",
            Self::InsideCodeBlock => "inside-code-block",
            Self::InsideInlineCode => "inside-inline-code",
            Self::NotFound => "not-found",
        }
    }
}

impl std::fmt::Display for OmissionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SpecialContext> for OmissionReason {
    fn from(context: SpecialContext) -> Self {
        match context {
            SpecialContext::Url => Self::InsideUrl,
            SpecialContext::Email => Self::InsideEmail,
            SpecialContext::CodeBlock => Self::InsideCodeBlock,
            SpecialContext::InlineCode => Self::InsideInlineCode,
        }
    }
}

/// An accepted acronym occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    /// Exact slice of the input, `&text[start..end]`
    pub surface: String,
    /// Form written to the output
    pub acronym: String,
    /// Resolved meaning
    pub meaning: String,
    /// Byte offset of the first char
    pub start: usize,
    /// Byte offset one past the last char
    pub end: usize,
    pub has_multiple_meanings: bool,
    /// Every meaning of the acronym, only set when it's ambiguous
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_meanings: Option<Vec<String>>,
}

/// A candidate span that was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmittedCandidate {
    pub surface: String,
    pub start: usize,
    pub end: usize,
    pub reason: OmissionReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Counters for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    /// Accepted plus ambiguous-unresolved candidates
    #[serde(rename = "totalAcronymsFound")]
    pub total_found: usize,
    pub total_expanded: usize,
    pub ambiguous_not_expanded: usize,
}

/// Everything a scan produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Accepted candidates, in text order
    pub matches: Vec<MatchCandidate>,
    /// Rejected candidates, only collected by detailed scans
    pub omitted: Vec<OmittedCandidate>,
    pub stats: ScanStats,
}

/// Dictionary information about one acronym
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcronymInfo {
    /// Canonical form as authored
    pub acronym: String,
    pub meanings: Vec<String>,
    pub has_duplicates: bool,
}

/// Summary counts over the whole dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryStats {
    pub total_acronyms: usize,
    /// Entries whose acronym has more than one meaning
    pub acronyms_with_duplicates: usize,
    /// Entries whose acronym contains a period
    pub acronyms_with_punctuation: usize,
}
