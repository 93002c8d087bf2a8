//! Lookup table from (kind, algorithm) to a handler

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::error::Result;
use super::model::{SuiteKind, TestCase, TestGroup};

/// Registry key for looking up handlers
#[derive(Hash, Eq, PartialEq, Debug, Clone)]
pub struct DispatchKey {
    pub kind: SuiteKind,
    pub algo: String,
}

/// Handler function type
pub type HandlerFn = fn(&TestGroup, &TestCase) -> Result<()>;

/// Global registry of algorithm handlers
pub static REGISTRY: Lazy<HashMap<DispatchKey, HandlerFn>> = Lazy::new(|| {
    let mut m = HashMap::<DispatchKey, HandlerFn>::new();
    super::algorithms::digest::register(&mut m);
    super::algorithms::hmac::register(&mut m);
    super::algorithms::kdf::register(&mut m);
    m
});

/// Helper function for registering handlers
pub fn insert(
    map: &mut HashMap<DispatchKey, HandlerFn>,
    kind: SuiteKind,
    algo: &str,
    handler: HandlerFn,
) {
    map.insert(
        DispatchKey {
            kind,
            algo: algo.to_string(),
        },
        handler,
    );
}
