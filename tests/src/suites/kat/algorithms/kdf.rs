//! PBKDF2, scrypt and legacy password-hash cases

use std::collections::HashMap;

use shanext_algorithms::hash::{HashFunction, Sha1, Sha256, Sha512};
use shanext_algorithms::kdf::{
    LegacyArgon2, LegacyArgon2Params, Pbkdf2, Scrypt, ScryptParams,
};

use crate::suites::kat::dispatcher::{insert, DispatchKey, HandlerFn};
use crate::suites::kat::error::{check_hex, EngineError, Result};
use crate::suites::kat::model::{SuiteKind, TestCase, TestGroup};

fn narrow<T: TryFrom<u64>>(case: &TestCase, name: &'static str) -> Result<T> {
    T::try_from(case.number(name)?)
        .map_err(|_| EngineError::InvalidData(format!("{} out of range", name)))
}

fn pbkdf2_with<H: HashFunction + Clone>(case: &TestCase) -> Result<Vec<u8>> {
    let key = Pbkdf2::<H>::pbkdf2(
        &case.bytes("password")?,
        &case.bytes("salt")?,
        narrow(case, "iterations")?,
        narrow(case, "dkLen")?,
    )?;
    Ok(key.to_vec())
}

fn pbkdf2(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let dk = match case.string("hash")?.as_str() {
        "SHA_1" => pbkdf2_with::<Sha1>(case)?,
        "SHA_256" => pbkdf2_with::<Sha256>(case)?,
        "SHA_512" => pbkdf2_with::<Sha512>(case)?,
        other => {
            return Err(EngineError::Unsupported {
                kind: "PBKDF2 hash".into(),
                algorithm: other.into(),
            })
        }
    };
    check_hex(&case.string("dk")?, &dk)
}

fn scrypt(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let params = ScryptParams::new(
        narrow(case, "n")?,
        narrow(case, "r")?,
        narrow(case, "p")?,
        narrow(case, "dkLen")?,
    )?;
    let dk = Scrypt::derive(&case.bytes("password")?, &case.bytes("salt")?, &params)?;
    check_hex(&case.string("dk")?, &dk)
}

fn legacy_argon2(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let params = LegacyArgon2Params {
        memory_cost: narrow(case, "memoryCost")?,
        time_cost: narrow(case, "timeCost")?,
        output_len: narrow(case, "dkLen")?,
        ..LegacyArgon2Params::default()
    };
    let dk = LegacyArgon2::hash(&case.bytes("password")?, &case.bytes("salt")?, &params)?;
    check_hex(&case.string("dk")?, &dk)
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, SuiteKind::Kdf, "PBKDF2", pbkdf2);
    insert(map, SuiteKind::Kdf, "SCRYPT", scrypt);
    insert(map, SuiteKind::Kdf, "ARGON2", legacy_argon2);
}
