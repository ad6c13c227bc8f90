// Variant pattern - finds whole-token occurrences of every dictionary variant
//
// All variants go into one Aho-Corasick automaton. Overlapping search yields
// every occurrence; walking them left to right and taking, at each position,
// the longest variant flanked by non-word chars gives leftmost-longest
// whole-token matches that never overlap.

use std::collections::HashSet;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

use crate::dictionary::{DictionaryError, DictionaryIndex};
use crate::text::{is_word_boundary, Side};

/// Compiled automaton over every variant of a dictionary
#[derive(Debug)]
pub struct VariantPattern {
    /// None when the dictionary has no variants at all
    automaton: Option<AhoCorasick>,
    /// Variants in automaton order, longest first
    variants: Vec<String>,
}

impl VariantPattern {
    /// Collect and compile every original and variant of the index
    pub fn new(index: &DictionaryIndex) -> Result<Self, DictionaryError> {
        let mut seen = HashSet::new();
        let mut variants: Vec<String> = Vec::new();
        for entry in index.entries() {
            for variant in std::iter::once(&entry.original).chain(&entry.variants) {
                if !variant.is_empty() && seen.insert(variant.as_str()) {
                    variants.push(variant.clone());
                }
            }
        }

        // Stable, so equal lengths keep dictionary order
        variants.sort_by(|a, b| b.len().cmp(&a.len()));

        if variants.is_empty() {
            crate::warn!("Dictionary has no variants, the scanner will never match");
            return Ok(Self {
                automaton: None,
                variants,
            });
        }

        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(&variants)
            .map_err(|e| DictionaryError::PatternError(e.to_string()))?;

        crate::debug!("Compiled variant pattern with {} variants", variants.len());

        Ok(Self {
            automaton: Some(automaton),
            variants,
        })
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Byte spans of whole-token variant occurrences, left to right
    pub fn find_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let mut occurrences: Vec<(usize, usize)> = automaton
            .find_overlapping_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect();
        occurrences.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut spans = Vec::new();
        let mut cursor = 0;
        for (start, end) in occurrences {
            if start < cursor {
                continue;
            }
            if is_word_boundary(text, start, Side::Before)
                && is_word_boundary(text, end, Side::After)
            {
                spans.push((start, end));
                cursor = end;
            }
        }
        spans
    }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;
