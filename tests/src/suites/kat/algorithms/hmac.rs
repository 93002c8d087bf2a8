//! HMAC cases over each hash

use std::collections::HashMap;

use shanext_algorithms::hash::{
    HashFunction, Md5, Ripemd160, Sha1, Sha224, Sha256, Sha384, Sha3_256, Sha512, Sha512_224,
    Sha512_256,
};
use shanext_algorithms::mac::Hmac;

use crate::suites::kat::dispatcher::{insert, DispatchKey, HandlerFn};
use crate::suites::kat::error::{check_hex, EngineError, Result};
use crate::suites::kat::model::{SuiteKind, TestCase, TestGroup};

fn hmac_case<H: HashFunction + Clone>(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let key = case.bytes("key")?;
    let msg = case.bytes("msg")?;
    let expected = case.string("mac")?;

    let tag = Hmac::<H>::mac(&key, &msg)?;
    check_hex(&expected, &tag)?;

    // the incremental path must agree with the one-shot call
    let mut mac = Hmac::<H>::new(&key)?;
    let (head, tail) = msg.split_at(msg.len() / 2);
    mac.update(head)?;
    mac.update(tail)?;
    check_hex(&expected, &mac.finalize()?)?;

    if !Hmac::<H>::verify(&key, &msg, &tag)? {
        return Err(EngineError::Primitive("verify rejected a valid tag".into()));
    }
    Ok(())
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, SuiteKind::Mac, "MD5", hmac_case::<Md5>);
    insert(map, SuiteKind::Mac, "SHA_1", hmac_case::<Sha1>);
    insert(map, SuiteKind::Mac, "SHA_224", hmac_case::<Sha224>);
    insert(map, SuiteKind::Mac, "SHA_256", hmac_case::<Sha256>);
    insert(map, SuiteKind::Mac, "SHA_384", hmac_case::<Sha384>);
    insert(map, SuiteKind::Mac, "SHA_512", hmac_case::<Sha512>);
    insert(map, SuiteKind::Mac, "SHA_512_224", hmac_case::<Sha512_224>);
    insert(map, SuiteKind::Mac, "SHA_512_256", hmac_case::<Sha512_256>);
    insert(map, SuiteKind::Mac, "SHA_3", hmac_case::<Sha3_256>);
    insert(map, SuiteKind::Mac, "RIPEMD_160", hmac_case::<Ripemd160>);
}
