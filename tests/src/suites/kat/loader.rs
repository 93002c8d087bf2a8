//! Loads known-answer vectors from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{EngineError, Result};
use super::model::TestSuite;

/// Names of the vector files shipped with this crate
pub const SUITE_NAMES: &[&str] = &["digest", "hmac", "kdf"];

fn kat_json_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("kat")
}

/// Parse a suite from JSON text
pub fn parse_suite(json: &str) -> Result<TestSuite> {
    serde_json::from_str(json).map_err(|e| EngineError::InvalidData(e.to_string()))
}

/// Load `src/vectors/kat/<name>.json`
pub fn load_suite_by_name(suite_name: &str) -> Result<TestSuite> {
    let file = kat_json_dir().join(format!("{}.json", suite_name));
    let json = fs::read_to_string(&file)
        .map_err(|e| EngineError::InvalidData(format!("failed to read {}: {}", file.display(), e)))?;
    parse_suite(&json)
}

/// Load every shipped suite
pub fn load_all_suites() -> Result<Vec<TestSuite>> {
    SUITE_NAMES.iter().map(|name| load_suite_by_name(name)).collect()
}
