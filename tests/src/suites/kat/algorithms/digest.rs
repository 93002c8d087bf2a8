//! Digest and SHAKE128 cases, computed through the name registry

use std::collections::HashMap;

use shanext_algorithms::registry::Algorithm;

use crate::suites::kat::dispatcher::{insert, DispatchKey, HandlerFn};
use crate::suites::kat::error::{check_hex, Result};
use crate::suites::kat::model::{SuiteKind, TestCase, TestGroup};

const SELECTORS: &[&str] = &[
    "MD5",
    "SHA_1",
    "SHA_224",
    "SHA_256",
    "SHA_384",
    "SHA_512",
    "SHA_512_224",
    "SHA_512_256",
    "SHA_3",
    "RIPEMD_160",
    "WHIRLPOOL",
];

fn fixed_digest(group: &TestGroup, case: &TestCase) -> Result<()> {
    let algorithm = Algorithm::from_name(&group.algorithm)?;
    let msg = case.bytes("msg")?;
    check_hex(&case.string("md")?, &algorithm.compute(&msg)?)
}

fn shake128(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let algorithm = Algorithm::shake128(case.number("outLen")? as usize)?;
    let msg = case.bytes("msg")?;
    check_hex(&case.string("md")?, &algorithm.compute(&msg)?)
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    for name in SELECTORS {
        insert(map, SuiteKind::Digest, name, fixed_digest);
    }
    insert(map, SuiteKind::Digest, "SHAKE128", shake128);
}
