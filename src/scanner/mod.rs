// Scanner module - detects acronym occurrences in free text

mod matcher;
mod pattern;
mod types;

pub use matcher::Scanner;
pub use pattern::VariantPattern;
pub use types::{
    AcronymInfo, DictionaryStats, MatchCandidate, OmissionReason, OmittedCandidate, ScanOutcome,
    ScanStats,
};
