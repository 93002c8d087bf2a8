//! Pure data model for the known-answer vector files.
//! No dependency on the rest of the framework.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::{EngineError, Result};

/// Flexible value that can be a string, number, or bool
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FlexValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl FlexValue {
    pub fn as_string(&self) -> String {
        match self {
            FlexValue::String(s) => s.clone(),
            FlexValue::Number(n) => n.to_string(),
            FlexValue::Bool(b) => b.to_string(),
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FlexValue::Number(n) => n.as_u64(),
            FlexValue::String(s) => s.parse().ok(),
            FlexValue::Bool(_) => None,
        }
    }
}

/// Which family of handlers a file targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteKind {
    Digest,
    Mac,
    Kdf,
}

impl SuiteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SuiteKind::Digest => "digest",
            SuiteKind::Mac => "mac",
            SuiteKind::Kdf => "kdf",
        }
    }
}

/// One known-answer case; every field except the id is kept by name
#[derive(Debug, Deserialize)]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(flatten)]
    pub inputs: HashMap<String, FlexValue>,
}

impl TestCase {
    pub fn field(&self, name: &'static str) -> Result<&FlexValue> {
        self.inputs.get(name).ok_or(EngineError::MissingField(name))
    }

    pub fn string(&self, name: &'static str) -> Result<String> {
        Ok(self.field(name)?.as_string())
    }

    pub fn bytes(&self, name: &'static str) -> Result<Vec<u8>> {
        Ok(hex::decode(self.string(name)?)?)
    }

    pub fn number(&self, name: &'static str) -> Result<u64> {
        self.field(name)?
            .as_u64()
            .ok_or_else(|| EngineError::InvalidData(format!("{} is not an integer", name)))
    }
}

/// Cases sharing one algorithm
#[derive(Debug, Deserialize)]
pub struct TestGroup {
    pub algorithm: String,
    pub tests: Vec<TestCase>,
}

/// Whole vector file
#[derive(Debug, Deserialize)]
pub struct TestSuite {
    pub kind: SuiteKind,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}
