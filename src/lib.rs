// Spanish legal acronym detection and expansion
//
// The crate-level functions run against a default engine built lazily from
// the bundled dictionary and the process-wide config store. Build an
// `ExpansionEngine` directly to use another dictionary or isolated settings.

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod format;
pub mod scanner;
pub mod text;

use std::sync::{Arc, OnceLock};

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use config::{
    ConfigError, ConfigStore, ConfigUpdate, ExpansionOptions, GlobalConfig, ResolvedOptions,
};
pub use dictionary::{CompiledDictionary, DictionaryBuilder, DictionaryError, DictionaryStore};
pub use engine::{ExpandError, ExpansionEngine};
pub use format::{DiagnosticOutput, Expansion, FormatError, Formatter, StructuredOutput};
pub use scanner::{AcronymInfo, DictionaryStats, MatchCandidate, OmissionReason, Scanner};

static DEFAULT_ENGINE: OnceLock<Result<ExpansionEngine, DictionaryError>> = OnceLock::new();

/// Engine over the bundled dictionary and the global config store
///
/// Built on first use. A dictionary that fails validation is remembered and
/// every later call returns the same error.
pub fn default_engine() -> Result<&'static ExpansionEngine, ExpandError> {
    DEFAULT_ENGINE
        .get_or_init(|| {
            info!("Building default expansion engine from bundled dictionary");
            let dictionary = DictionaryStore::bundled()?;
            let scanner = Scanner::new(dictionary)?;
            Ok(ExpansionEngine::with_config(
                Arc::new(scanner),
                ConfigStore::global(),
            ))
        })
        .as_ref()
        .map_err(|e| {
            error!("Default expansion engine unavailable: {}", e);
            ExpandError::Dictionary(e.clone())
        })
}

/// Expand acronyms in `text` using the default engine
pub fn expand_acronyms(
    text: &str,
    options: Option<&ExpansionOptions>,
) -> Result<Expansion, ExpandError> {
    default_engine()?.expand(text, options)
}

/// Structured expansion with the reason each skipped acronym was not expanded
pub fn expand_acronyms_detailed(
    text: &str,
    options: Option<&ExpansionOptions>,
) -> Result<DiagnosticOutput, ExpandError> {
    default_engine()?.expand_detailed(text, options)
}

/// Meanings of one acronym in the bundled dictionary
pub fn find_acronym(acronym: &str) -> Result<Option<AcronymInfo>, ExpandError> {
    Ok(default_engine()?.find_acronym(acronym))
}

/// Every acronym in the bundled dictionary
pub fn list_acronyms() -> Result<Vec<String>, ExpandError> {
    Ok(default_engine()?.list_acronyms())
}

pub fn dictionary_stats() -> Result<DictionaryStats, ExpandError> {
    Ok(default_engine()?.dictionary_stats())
}

/// Register a formatter on the default engine
pub fn register_formatter(
    name: impl Into<String>,
    formatter: Arc<dyn Formatter>,
) -> Result<(), ExpandError> {
    default_engine()?.register_formatter(name, formatter);
    Ok(())
}

/// Update the process-wide settings
pub fn configure_globally(update: ConfigUpdate) {
    ConfigStore::global().configure(update);
}

pub fn global_config() -> GlobalConfig {
    ConfigStore::global().snapshot()
}

pub fn reset_global_config() {
    ConfigStore::global().reset();
}
