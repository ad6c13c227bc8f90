// Config store - process-wide expansion settings
//
// Reads vastly outnumber writes, so the state sits behind a parking_lot
// RwLock and every read hands out a snapshot.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::{ConfigError, ExpansionOptions, ResolvedOptions};

static GLOBAL_CONFIG: OnceLock<Arc<ConfigStore>> = OnceLock::new();

/// Current global settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    /// Master switch; a per-call `force_expansion` overrides it
    pub enabled: bool,
    pub default_options: ResolvedOptions,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_options: ResolvedOptions::default(),
        }
    }
}

/// Partial update of the global settings
///
/// This is also the shape of a config file:
/// `{"enabled": false, "defaultOptions": {"format": "html"}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Merged field by field over the current defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_options: Option<ExpansionOptions>,
}

/// Thread-safe holder of a [`GlobalConfig`]
#[derive(Debug, Default)]
pub struct ConfigStore {
    config: RwLock<GlobalConfig>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide store shared by the crate-level functions
    pub fn global() -> Arc<ConfigStore> {
        Arc::clone(GLOBAL_CONFIG.get_or_init(|| Arc::new(ConfigStore::new())))
    }

    /// Apply a partial update
    pub fn configure(&self, update: ConfigUpdate) {
        let mut config = self.config.write();
        if let Some(enabled) = update.enabled {
            config.enabled = enabled;
        }
        if let Some(options) = update.default_options {
            config.default_options = config.default_options.merge(&options);
        }
        crate::debug!(
            "Global config updated: enabled={}, format={}",
            config.enabled,
            config.default_options.format
        );
    }

    /// Copy of the current settings
    pub fn snapshot(&self) -> GlobalConfig {
        self.config.read().clone()
    }

    /// Restore the built-in defaults
    pub fn reset(&self) {
        *self.config.write() = GlobalConfig::default();
        crate::debug!("Global config reset to defaults");
    }

    /// Whether a call with these local options should expand at all
    pub fn should_expand(&self, local: Option<&ExpansionOptions>) -> bool {
        match local.and_then(|options| options.force_expansion) {
            Some(force) => force,
            None => self.config.read().enabled,
        }
    }

    /// Local options merged over the global defaults
    pub fn resolve(&self, local: Option<&ExpansionOptions>) -> ResolvedOptions {
        let config = self.config.read();
        match local {
            Some(options) => config.default_options.merge(options),
            None => config.default_options.clone(),
        }
    }

    /// Apply a JSON config file, if it exists
    pub fn load_file(&self, path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            crate::debug!("No config file at {:?}, keeping current settings", path);
            return Ok(());
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;
        let update: ConfigUpdate =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        crate::info!("Applying config file {:?}", path);
        self.configure(update);
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
