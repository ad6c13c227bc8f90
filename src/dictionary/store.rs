// Dictionary store - loads and persists compiled dictionaries as JSON

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{CompiledDictionary, DictionaryBuilder, DictionaryError};

/// File-backed storage for one [`CompiledDictionary`]
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    /// Path to the compiled dictionary file
    path: PathBuf,
}

impl DictionaryStore {
    /// Create a store for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compile the rows bundled with the crate
    pub fn bundled() -> Result<CompiledDictionary, DictionaryError> {
        Ok(DictionaryBuilder::bundled()?.build())
    }

    /// Read the compiled dictionary from disk
    pub fn load(&self) -> Result<CompiledDictionary, DictionaryError> {
        crate::debug!("Loading compiled dictionary from {:?}", self.path);

        if !self.path.exists() {
            return Err(DictionaryError::LoadError(format!(
                "{} does not exist",
                self.path.display()
            )));
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?;
        let dictionary: CompiledDictionary = serde_json::from_str(&content)
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?;

        crate::info!(
            "Loaded compiled dictionary with {} entries from {:?}",
            dictionary.entries.len(),
            self.path
        );
        Ok(dictionary)
    }

    /// Persist a compiled dictionary using atomic write (temp file + rename)
    pub fn save(&self, dictionary: &CompiledDictionary) -> Result<(), DictionaryError> {
        crate::debug!(
            "Persisting {} dictionary entries to {:?}",
            dictionary.entries.len(),
            self.path
        );

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| DictionaryError::PersistenceError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(dictionary)
            .map_err(|e| DictionaryError::PersistenceError(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path).map_err(|e| {
                DictionaryError::PersistenceError(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes()).map_err(|e| {
                DictionaryError::PersistenceError(format!("Failed to write: {}", e))
            })?;
            file.sync_all().map_err(|e| {
                DictionaryError::PersistenceError(format!("Failed to sync: {}", e))
            })?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            DictionaryError::PersistenceError(format!("Failed to rename: {}", e))
        })?;

        crate::debug!("Compiled dictionary persisted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
