//! Default-algorithm selection read from `hash_config.json`
//!
//! The file holds a single record, `{"default_algorithm": "SHA_256"}`. A
//! missing file means the default configuration; a present file naming an
//! unknown algorithm is an error when the algorithm is resolved.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shanext_algorithms::registry::Algorithm;

use crate::error::Result;

/// Conventional configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "hash_config.json";

/// Algorithm used when no configuration says otherwise
pub const DEFAULT_ALGORITHM: &str = "SHA_256";

/// Runtime hashing configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Selector name understood by [`Algorithm::from_name`]
    #[serde(default = "default_algorithm")]
    pub default_algorithm: String,
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
        }
    }
}

impl HashConfig {
    /// Parse a JSON configuration record
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the JSON record format
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read the configuration at `path`, falling back to the default when
    /// the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "hash configuration not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`HashConfig::load`], but writes the default record first when
    /// the file is missing
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "writing default hash configuration");
            fs::write(path, Self::default().to_json()?)?;
        }
        Self::load(path)
    }

    /// Resolve the configured algorithm
    pub fn algorithm(&self) -> Result<Algorithm> {
        Ok(Algorithm::from_name(&self.default_algorithm)?)
    }
}
