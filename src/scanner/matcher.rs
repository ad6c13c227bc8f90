// Acronym scanner - finds candidate spans and runs them through the rejection pipeline
//
// Pipeline per candidate, first rejection wins:
// 1. token boundary (silent)
// 2. protected context (URL, email, code block, inline code)
// 3. exclude filter
// 4. include filter
// 5. first occurrence only
// 6. dictionary lookup
// 7. ambiguity policy (manual resolution, auto resolve, else rejected)

use std::collections::HashSet;

use super::pattern::VariantPattern;
use super::types::{
    AcronymInfo, DictionaryStats, MatchCandidate, OmissionReason, OmittedCandidate, ScanOutcome,
};
use crate::config::ResolvedOptions;
use crate::dictionary::{CompiledDictionary, DictionaryError, DictionaryIndex};
use crate::text::{is_part_of_larger_token, normalize, special_context};

/// What happened to one candidate span
enum Verdict {
    Accept(MatchCandidate),
    Omit(OmissionReason, Option<String>),
    /// Rejected without a reportable reason
    Drop,
}

/// Immutable scanner over one dictionary
///
/// Holds no per-call state, so a single instance can serve concurrent scans.
#[derive(Debug)]
pub struct Scanner {
    index: DictionaryIndex,
    pattern: VariantPattern,
}

impl Scanner {
    /// Validate the dictionary and compile its variant pattern
    pub fn new(dictionary: CompiledDictionary) -> Result<Self, DictionaryError> {
        let index = DictionaryIndex::new(dictionary)?;
        Self::from_index(index)
    }

    pub fn from_index(index: DictionaryIndex) -> Result<Self, DictionaryError> {
        let pattern = VariantPattern::new(&index)?;
        crate::info!(
            "Scanner ready: {} entries, {} variants",
            index.len(),
            pattern.variants().len()
        );
        Ok(Self { index, pattern })
    }

    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    /// Scan without collecting omissions
    pub fn scan(&self, text: &str, options: &ResolvedOptions) -> ScanOutcome {
        self.run(text, options, false)
    }

    /// Scan and record every rejected candidate with its reason
    pub fn scan_detailed(&self, text: &str, options: &ResolvedOptions) -> ScanOutcome {
        self.run(text, options, true)
    }

    fn run(&self, text: &str, options: &ResolvedOptions, collect_omitted: bool) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        if text.trim().is_empty() {
            return outcome;
        }

        // Call-local, never shared between scans
        let mut seen: HashSet<String> = HashSet::new();

        for (start, end) in self.pattern.find_spans(text) {
            match self.evaluate(text, start, end, options, &mut seen) {
                Verdict::Accept(candidate) => outcome.matches.push(candidate),
                Verdict::Omit(reason, details) => {
                    crate::trace!("Omitting '{}' at {}: {}", &text[start..end], start, reason);
                    if reason == OmissionReason::AmbiguousUnresolved {
                        outcome.stats.ambiguous_not_expanded += 1;
                    }
                    if collect_omitted {
                        outcome.omitted.push(OmittedCandidate {
                            surface: text[start..end].to_string(),
                            start,
                            end,
                            reason,
                            details,
                        });
                    }
                }
                Verdict::Drop => {}
            }
        }

        outcome.stats.total_expanded = outcome.matches.len();
        outcome.stats.total_found =
            outcome.stats.total_expanded + outcome.stats.ambiguous_not_expanded;
        outcome
    }

    fn evaluate(
        &self,
        text: &str,
        start: usize,
        end: usize,
        options: &ResolvedOptions,
        seen: &mut HashSet<String>,
    ) -> Verdict {
        let surface = &text[start..end];

        if is_part_of_larger_token(text, start, end) {
            return Verdict::Drop;
        }

        if let Some(context) = special_context(text, start, end) {
            return Verdict::Omit(context.into(), None);
        }

        let key = normalize(surface);

        if options.exclude.iter().any(|term| normalize(term) == key) {
            return Verdict::Omit(OmissionReason::Excluded, None);
        }

        if let Some(include) = options.include.as_ref().filter(|terms| !terms.is_empty()) {
            if !include.iter().any(|term| normalize(term) == key) {
                return Verdict::Omit(OmissionReason::NotInInclude, None);
            }
        }

        if options.expand_only_first && !seen.insert(key.clone()) {
            return Verdict::Omit(
                OmissionReason::ExpandOnlyFirst,
                Some("Already expanded earlier in the text".to_string()),
            );
        }

        let Some(entry) = self.index.lookup(surface, options.preserve_case) else {
            return Verdict::Omit(OmissionReason::NotFound, None);
        };

        let conflict = self.index.conflict_for(&entry.original);
        let meaning = match conflict {
            None => entry.meaning.clone(),
            Some(group) => {
                let manual = options
                    .duplicate_resolution
                    .iter()
                    .find(|(term, _)| normalize(term) == key)
                    .map(|(_, meaning)| meaning.clone());

                match manual {
                    Some(meaning) => meaning,
                    None if options.auto_resolve_duplicates => match group.default_candidate() {
                        Some(candidate) => candidate.meaning.clone(),
                        None => entry.meaning.clone(),
                    },
                    None => {
                        return Verdict::Omit(
                            OmissionReason::AmbiguousUnresolved,
                            Some(format!("Possible meanings: {}", group.meanings().join(" | "))),
                        );
                    }
                }
            }
        };

        let acronym = if options.preserve_case {
            surface.to_string()
        } else {
            entry.original.clone()
        };

        Verdict::Accept(MatchCandidate {
            surface: surface.to_string(),
            acronym,
            meaning,
            start,
            end,
            has_multiple_meanings: conflict.is_some(),
            all_meanings: conflict.map(|group| group.meanings()),
        })
    }

    /// Dictionary information for one acronym, matched case-sensitively
    pub fn find_acronym(&self, acronym: &str) -> Option<AcronymInfo> {
        let entry = self.index.lookup(acronym, true)?;
        let conflict = self.index.conflict_for(&entry.original);

        Some(AcronymInfo {
            acronym: entry.original.clone(),
            meanings: conflict
                .map(|group| group.meanings())
                .unwrap_or_else(|| vec![entry.meaning.clone()]),
            has_duplicates: conflict.is_some(),
        })
    }

    /// Canonical form of every acronym, in dictionary order without repeats
    ///
    /// Entries sharing one canonical form (the meanings of "CE") are listed
    /// once, so the result can be shorter than
    /// [`DictionaryStats::total_acronyms`], which counts entries.
    pub fn list_acronyms(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.index
            .entries()
            .iter()
            .filter(|entry| seen.insert(entry.original.as_str()))
            .map(|entry| entry.original.clone())
            .collect()
    }

    pub fn stats(&self) -> DictionaryStats {
        let entries = self.index.entries();
        DictionaryStats {
            total_acronyms: entries.len(),
            acronyms_with_duplicates: entries
                .iter()
                .filter(|entry| self.index.conflict_for(&entry.original).is_some())
                .count(),
            acronyms_with_punctuation: entries
                .iter()
                .filter(|entry| entry.original.contains('.'))
                .count(),
        }
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
