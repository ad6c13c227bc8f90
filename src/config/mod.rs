// Configuration module - expansion options, their merge rules and the global config store

mod options;
mod store;

pub use options::{ExpansionOptions, ResolvedOptions, DEFAULT_FORMAT};
pub use store::{ConfigStore, ConfigUpdate, GlobalConfig};

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Config file exists but couldn't be read
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    /// Config file is not valid JSON for a config update
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}
