//! Source/target language pair with JSON file persistence.
//!
//! The stored document holds exactly two string fields,
//! `sourceLanguage` and `targetLanguage`, both BCP 47 tags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Errors from loading or saving the language pair.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The preferences file could not be read or written.
    #[error("preferences io failed: {0}")]
    Io(#[from] io::Error),

    /// The preferences file exists but does not hold the stored shape.
    #[error("preferences parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// No platform config directory could be resolved.
    #[error("no config directory available")]
    NoConfigDir,
}

/// The user's language pair: what they speak and what they are learning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePair {
    /// BCP 47 tag of the language the user already speaks.
    pub source_language: String,
    /// BCP 47 tag of the language being learned.
    pub target_language: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self { source_language: "en-US".to_string(), target_language: "es".to_string() }
    }
}

impl LanguagePair {
    #[must_use]
    pub fn new(source_language: String, target_language: String) -> Self {
        Self { source_language, target_language }
    }

    /// Swap source and target in place (the "reverse direction" action).
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
    }

    /// Load the pair from `path`. A missing file is not an error: first
    /// launch gets the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file exists but cannot be read or
    /// parsed. A corrupt file surfaces rather than silently resetting the
    /// user's choice.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no language preferences file; using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save the pair to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), "language pair saved");
        Ok(())
    }

    /// Default store location under the platform config directory,
    /// `<config>/lingolens/languages.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoConfigDir`] on platforms without a resolvable
    /// config directory.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let base = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(base.join("lingolens").join("languages.json"))
    }
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
