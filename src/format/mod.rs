// Output formatters - render scan results as plain text, HTML or structured data

mod html;
mod plain;
mod structured;

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use crate::scanner::{MatchCandidate, ScanStats};

pub use html::{escape_html, HtmlFormatter};
pub use plain::PlainTextFormatter;
pub use structured::{
    DiagnosticOutput, ExpandedAcronym, OmittedAcronym, Position, StructuredFormatter,
    StructuredOutput,
};

/// Result of an expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Expansion {
    /// Rendered text (plain, HTML or any custom text format)
    Text(String),
    /// Structured result with per-acronym detail
    Structured(StructuredOutput),
}

impl Expansion {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }

    pub fn as_structured(&self) -> Option<&StructuredOutput> {
        match self {
            Self::Text(_) => None,
            Self::Structured(output) => Some(output),
        }
    }

    /// The expanded text, whatever the variant
    pub fn expanded_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Structured(output) => &output.expanded_text,
        }
    }
}

/// Error types for formatter selection
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Unknown format: {format}. Available formats: {}", .available.join(", "))]
    UnknownFormat {
        format: String,
        available: Vec<String>,
    },
}

/// Renders accepted candidates over the original text
///
/// `matches` are in text order and never overlap.
pub trait Formatter: Send + Sync {
    fn format(&self, original: &str, matches: &[MatchCandidate], stats: &ScanStats) -> Expansion;
}

/// Rebuild `original` with every match span replaced by `render(match)`
pub(crate) fn splice<F>(original: &str, matches: &[MatchCandidate], render: F) -> String
where
    F: Fn(&MatchCandidate) -> String,
{
    let mut output = String::with_capacity(original.len() + matches.len() * 32);
    let mut cursor = 0;
    for candidate in matches {
        output.push_str(&original[cursor..candidate.start]);
        output.push_str(&render(candidate));
        cursor = candidate.end;
    }
    output.push_str(&original[cursor..]);
    output
}

/// Named formatters, in registration order
pub struct FormatterRegistry {
    formatters: RwLock<Vec<(String, Arc<dyn Formatter>)>>,
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.names())
            .finish()
    }
}

impl FormatterRegistry {
    /// Registry with the built-in `plain`, `html` and `structured` formatters
    pub fn new() -> Self {
        let builtins = vec![
            ("plain".to_string(), Arc::new(PlainTextFormatter) as Arc<dyn Formatter>),
            ("html".to_string(), Arc::new(HtmlFormatter) as Arc<dyn Formatter>),
            ("structured".to_string(), Arc::new(StructuredFormatter) as Arc<dyn Formatter>),
        ];
        Self {
            formatters: RwLock::new(builtins),
        }
    }

    /// Add a formatter, replacing any formatter with the same name
    pub fn register(&self, name: impl Into<String>, formatter: Arc<dyn Formatter>) {
        let name = name.into();
        let mut formatters = self.formatters.write();
        match formatters.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => {
                crate::debug!("Replacing formatter '{}'", name);
                slot.1 = formatter;
            }
            None => {
                crate::debug!("Registering formatter '{}'", name);
                formatters.push((name, formatter));
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Formatter>, FormatError> {
        let formatters = self.formatters.read();
        formatters
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, formatter)| Arc::clone(formatter))
            .ok_or_else(|| FormatError::UnknownFormat {
                format: name.to_string(),
                available: formatters.iter().map(|(n, _)| n.clone()).collect(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.formatters
            .read()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
