// Expansion engine - merges options, scans text and hands results to a formatter

use std::sync::Arc;

use crate::config::{ConfigError, ConfigStore, ExpansionOptions};
use crate::dictionary::{CompiledDictionary, DictionaryError};
use crate::format::{
    DiagnosticOutput, Expansion, FormatError, Formatter, FormatterRegistry, OmittedAcronym,
    StructuredFormatter, StructuredOutput,
};
use crate::scanner::{AcronymInfo, DictionaryStats, Scanner};

/// Name of the structured output format
const STRUCTURED_FORMAT: &str = "structured";

/// Error types for expansion calls
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpandError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Public entry point tying a scanner, a config store and formatters together
#[derive(Debug)]
pub struct ExpansionEngine {
    scanner: Arc<Scanner>,
    config: Arc<ConfigStore>,
    formatters: FormatterRegistry,
}

impl ExpansionEngine {
    /// Engine over a compiled dictionary with its own config store
    pub fn new(dictionary: CompiledDictionary) -> Result<Self, DictionaryError> {
        Ok(Self::with_config(
            Arc::new(Scanner::new(dictionary)?),
            Arc::new(ConfigStore::new()),
        ))
    }

    pub fn with_config(scanner: Arc<Scanner>, config: Arc<ConfigStore>) -> Self {
        Self {
            scanner,
            config,
            formatters: FormatterRegistry::new(),
        }
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Expand every acronym in `text`
    ///
    /// When expansion is disabled the text comes back unchanged, as an empty
    /// structured result if the structured format was asked for.
    pub fn expand(
        &self,
        text: &str,
        options: Option<&ExpansionOptions>,
    ) -> Result<Expansion, ExpandError> {
        let resolved = self.config.resolve(options);

        if !self.config.should_expand(options) {
            crate::debug!("Expansion disabled, returning text unchanged");
            if resolved.format == STRUCTURED_FORMAT {
                return Ok(Expansion::Structured(StructuredOutput::unchanged(text)));
            }
            return Ok(Expansion::Text(text.to_string()));
        }

        let formatter = self.formatters.get(&resolved.format)?;
        let outcome = self.scanner.scan(text, &resolved);
        crate::debug!(
            "Expanded {} of {} acronyms ({} format)",
            outcome.stats.total_expanded,
            outcome.stats.total_found,
            resolved.format
        );

        Ok(formatter.format(text, &outcome.matches, &outcome.stats))
    }

    /// Structured expansion plus every candidate that was not expanded
    pub fn expand_detailed(
        &self,
        text: &str,
        options: Option<&ExpansionOptions>,
    ) -> Result<DiagnosticOutput, ExpandError> {
        if !self.config.should_expand(options) {
            return Ok(DiagnosticOutput::unchanged(text));
        }

        let resolved = self.config.resolve(options);
        let outcome = self.scanner.scan_detailed(text, &resolved);

        Ok(DiagnosticOutput {
            output: StructuredFormatter.build(text, &outcome.matches, &outcome.stats),
            omitted_acronyms: outcome.omitted.iter().map(OmittedAcronym::from).collect(),
        })
    }

    pub fn find_acronym(&self, acronym: &str) -> Option<AcronymInfo> {
        self.scanner.find_acronym(acronym)
    }

    pub fn list_acronyms(&self) -> Vec<String> {
        self.scanner.list_acronyms()
    }

    pub fn dictionary_stats(&self) -> DictionaryStats {
        self.scanner.stats()
    }

    /// Make a formatter available under `name` for the `format` option
    pub fn register_formatter(&self, name: impl Into<String>, formatter: Arc<dyn Formatter>) {
        self.formatters.register(name, formatter);
    }

    pub fn formats(&self) -> Vec<String> {
        self.formatters.names()
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
