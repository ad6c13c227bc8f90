// Structured formatter - expanded text plus per-acronym detail and counters

use serde::{Deserialize, Serialize};

use super::{Expansion, Formatter, PlainTextFormatter};
use crate::scanner::{MatchCandidate, OmissionReason, OmittedCandidate, ScanStats};

/// Byte span in the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

/// One expanded acronym
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedAcronym {
    /// Form written to the expanded text; the canonical dictionary form when
    /// case is not preserved, so it can differ from the slice at `position`
    pub acronym: String,
    /// Exact slice of the original text at `position`
    pub surface: String,
    pub expansion: String,
    pub position: Position,
    pub has_multiple_meanings: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_meanings: Option<Vec<String>>,
}

impl From<&MatchCandidate> for ExpandedAcronym {
    fn from(candidate: &MatchCandidate) -> Self {
        Self {
            acronym: candidate.acronym.clone(),
            surface: candidate.surface.clone(),
            expansion: candidate.meaning.clone(),
            position: Position {
                start: candidate.start,
                end: candidate.end,
            },
            has_multiple_meanings: candidate.has_multiple_meanings,
            all_meanings: candidate.all_meanings.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredOutput {
    pub original_text: String,
    /// Same text the plain formatter produces
    pub expanded_text: String,
    pub acronyms: Vec<ExpandedAcronym>,
    pub stats: ScanStats,
}

impl StructuredOutput {
    /// Output for text that was left untouched
    pub fn unchanged(text: &str) -> Self {
        Self {
            original_text: text.to_string(),
            expanded_text: text.to_string(),
            acronyms: Vec::new(),
            stats: ScanStats::default(),
        }
    }
}

/// A detected acronym that was not expanded, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmittedAcronym {
    pub acronym: String,
    pub position: Position,
    pub reason: OmissionReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&OmittedCandidate> for OmittedAcronym {
    fn from(omitted: &OmittedCandidate) -> Self {
        Self {
            acronym: omitted.surface.clone(),
            position: Position {
                start: omitted.start,
                end: omitted.end,
            },
            reason: omitted.reason,
            details: omitted.details.clone(),
        }
    }
}

/// Structured output plus every rejected candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticOutput {
    #[serde(flatten)]
    pub output: StructuredOutput,
    pub omitted_acronyms: Vec<OmittedAcronym>,
}

impl DiagnosticOutput {
    pub fn unchanged(text: &str) -> Self {
        Self {
            output: StructuredOutput::unchanged(text),
            omitted_acronyms: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredFormatter;

impl StructuredFormatter {
    pub fn build(
        &self,
        original: &str,
        matches: &[MatchCandidate],
        stats: &ScanStats,
    ) -> StructuredOutput {
        StructuredOutput {
            original_text: original.to_string(),
            expanded_text: PlainTextFormatter.render(original, matches),
            acronyms: matches.iter().map(ExpandedAcronym::from).collect(),
            stats: *stats,
        }
    }
}

impl Formatter for StructuredFormatter {
    fn format(&self, original: &str, matches: &[MatchCandidate], stats: &ScanStats) -> Expansion {
        Expansion::Structured(self.build(original, matches, stats))
    }
}

#[cfg(test)]
#[path = "structured_test.rs"]
mod tests;
