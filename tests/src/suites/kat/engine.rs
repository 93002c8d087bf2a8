//! Engine that routes cases through the dispatcher

use super::dispatcher::{DispatchKey, REGISTRY};
use super::error::{EngineError, Result};
use super::model::{SuiteKind, TestCase, TestGroup};
use super::runner::KatEngine;

/// One instance suffices for all suites.
pub struct ShanextEngine;

impl KatEngine for ShanextEngine {
    fn run(&self, kind: SuiteKind, group: &TestGroup, case: &TestCase) -> std::result::Result<(), String> {
        self.run_internal(kind, group, case).map_err(|e| e.to_string())
    }
}

impl ShanextEngine {
    fn run_internal(&self, kind: SuiteKind, group: &TestGroup, case: &TestCase) -> Result<()> {
        let key = DispatchKey {
            kind,
            algo: group.algorithm.clone(),
        };

        let handler = REGISTRY.get(&key).ok_or_else(|| EngineError::Unsupported {
            kind: kind.as_str().to_string(),
            algorithm: group.algorithm.clone(),
        })?;
        handler(group, case)
    }
}
