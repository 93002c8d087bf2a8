//! Generic driver that executes a `TestSuite` using a pluggable engine.

use super::model::{SuiteKind, TestCase, TestGroup, TestSuite};

/// Trait every back-end must implement.
pub trait KatEngine {
    /// Execute one test case and return `Ok(())` when the output matches.
    fn run(&self, kind: SuiteKind, group: &TestGroup, case: &TestCase) -> Result<(), String>;
}

/// Outcome of one suite
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: Vec<String>,
}

/// Thin wrapper that walks suites and tallies results.
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    pub fn run_suite(&self, suite: &TestSuite) -> Tally {
        let mut tally = Tally::default();

        for group in &suite.groups {
            tracing::debug!(
                kind = suite.kind.as_str(),
                algorithm = %group.algorithm,
                cases = group.tests.len(),
                "running group"
            );

            for case in &group.tests {
                match self.engine.run(suite.kind, group, case) {
                    Ok(()) => tally.passed += 1,
                    Err(e) => tally.failed.push(format!(
                        "{} {} case {}: {}",
                        suite.kind.as_str(),
                        group.algorithm,
                        case.test_id,
                        e
                    )),
                }
            }
        }

        tracing::info!(
            kind = suite.kind.as_str(),
            passed = tally.passed,
            failed = tally.failed.len(),
            "suite finished"
        );
        tally
    }
}
