use super::*;
use crate::kdf::scrypt;
use shanext_api::DigestPrimitive;

fn compute_hex(algorithm: &Algorithm, input: &[u8]) -> String {
    hex::encode(algorithm.compute(input).unwrap())
}

#[test]
fn test_fixed_digests_of_abc() {
    let cases: &[(Algorithm, &str)] = &[
        (Algorithm::Md5, "900150983cd24fb0d6963f7d28e17f72"),
        (Algorithm::Sha1, "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            Algorithm::Sha224,
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
        ),
        (
            Algorithm::Sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            Algorithm::Sha384,
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7",
        ),
        (
            Algorithm::Sha512_224,
            "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa",
        ),
        (
            Algorithm::Sha512_256,
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
        ),
        (
            Algorithm::Sha3_256,
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
        ),
        (Algorithm::Ripemd160, "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
        (
            Algorithm::Whirlpool,
            "4e2448a4c6f486bb16b6562c73b4020bf3043e3a731bce721ae1b303d97e6d4c\
             7181eebdb6c57e277d0e34957114cbd6c797fc9d95d8b582d225292076d4eef5",
        ),
    ];

    for (algorithm, expected) in cases {
        assert_eq!(&compute_hex(algorithm, b"abc"), expected, "{}", algorithm);
        assert_eq!(algorithm.output_len() * 2, expected.len(), "{}", algorithm);
        assert!(!algorithm.is_extendable());
    }
}

#[test]
fn test_shake128_output_length() {
    let shake = Algorithm::shake128(16).unwrap();
    assert!(shake.is_extendable());
    assert_eq!(shake.output_len(), 16);
    assert_eq!(compute_hex(&shake, b"abc"), "5881092dd818bf5cf8a3ddb793fbcba7");

    assert!(Algorithm::shake128(0).is_err());
    assert!(Algorithm::Shake128 { output_len: 0 }.compute(b"abc").is_err());
}

#[test]
fn test_from_name_selectors() {
    assert_eq!(Algorithm::from_name("SHA_256").unwrap(), Algorithm::Sha256);
    assert_eq!(Algorithm::from_name("sha-256").unwrap(), Algorithm::Sha256);
    assert_eq!(Algorithm::from_name("SHA_1").unwrap(), Algorithm::Sha1);
    assert_eq!(Algorithm::from_name("SHA_512_224").unwrap(), Algorithm::Sha512_224);
    assert_eq!(Algorithm::from_name("SHA-512/256").unwrap(), Algorithm::Sha512_256);
    assert_eq!(Algorithm::from_name("SHA_3").unwrap(), Algorithm::Sha3_256);
    assert_eq!(Algorithm::from_name("SHA3-256").unwrap(), Algorithm::Sha3_256);
    assert_eq!(Algorithm::from_name("RIPEMD-160").unwrap(), Algorithm::Ripemd160);
    assert_eq!(Algorithm::from_name("whirlpool").unwrap(), Algorithm::Whirlpool);
    assert_eq!(Algorithm::from_name(" MD5 ").unwrap(), Algorithm::Md5);
    assert_eq!(
        Algorithm::from_name("SHAKE128").unwrap(),
        Algorithm::Shake128 { output_len: 32 }
    );
    assert!(matches!(
        Algorithm::from_name("SCRYPT").unwrap(),
        Algorithm::Scrypt { .. }
    ));
    assert!(matches!(
        Algorithm::from_name("ARGON2").unwrap(),
        Algorithm::LegacyArgon2 { .. }
    ));
}

#[test]
fn test_unknown_name() {
    match Algorithm::from_name("SHA_9000") {
        Err(Error::UnknownAlgorithm { name }) => assert_eq!(name, "SHA_9000"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!("BLAKE2".parse::<Algorithm>().is_err());
    assert!("".parse::<Algorithm>().is_err());
}

#[test]
fn test_names_round_trip_through_from_name() {
    for algorithm in [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
        Algorithm::Sha3_256,
        Algorithm::Ripemd160,
        Algorithm::Whirlpool,
    ] {
        let parsed: Algorithm = algorithm.to_string().parse().unwrap();
        assert_eq!(parsed, algorithm);
    }
}

#[test]
fn test_block_sizes() {
    assert_eq!(Algorithm::Md5.block_size(), Some(64));
    assert_eq!(Algorithm::Sha512_224.block_size(), Some(128));
    assert_eq!(Algorithm::Sha3_256.block_size(), Some(136));
    assert_eq!(Algorithm::Shake128 { output_len: 32 }.block_size(), Some(168));
    assert_eq!(Algorithm::Whirlpool.block_size(), Some(64));
    assert_eq!(Algorithm::from_name("SCRYPT").unwrap().block_size(), None);
}

#[test]
fn test_scrypt_dispatch() {
    let params = ScryptParams::new(16, 1, 1, 64).unwrap();
    let algorithm = Algorithm::scrypt(params, b"");
    assert_eq!(algorithm.output_len(), 64);
    assert_eq!(
        algorithm.compute(b"").unwrap(),
        scrypt(b"", b"", 16, 1, 1, 64).unwrap().to_vec()
    );
}

#[test]
fn test_legacy_argon2_dispatch() {
    let algorithm = Algorithm::legacy_argon2(LegacyArgon2Params::default(), b"somesalt");
    assert_eq!(
        compute_hex(&algorithm, b"password"),
        "000e011103001f07070e011704001f01000e011103001f07070e011704001f01"
    );
    assert!(algorithm.compute(b"").is_err());
}

#[test]
fn test_empty_input_is_accepted_by_digests() {
    assert_eq!(
        compute_digest(&Algorithm::Ripemd160, b"").map(hex::encode).unwrap(),
        "9c1185a5c5e9fc54612808977ee8f548b2258d31"
    );
    assert_eq!(
        compute_digest(&Algorithm::Md5, b"").map(hex::encode).unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
}

#[test]
fn test_digest_primitive_object() {
    let primitives: Vec<Box<dyn DigestPrimitive>> = vec![
        Box::new(Algorithm::Sha256),
        Box::new(Algorithm::Shake128 { output_len: 20 }),
    ];

    assert_eq!(primitives[0].name(), "SHA-256");
    assert!(!primitives[0].is_variable_length());
    assert!(primitives[1].is_variable_length());
    assert_eq!(primitives[1].compute(b"abc").unwrap().len(), 20);

    let err = Algorithm::Shake128 { output_len: 0 }.compute(b"abc");
    assert!(err.is_err());
    let api_err = DigestPrimitive::compute(&Algorithm::Shake128 { output_len: 0 }, b"abc");
    assert!(matches!(
        api_err,
        Err(shanext_api::Error::InvalidParameter {
            context: "SHAKE128",
            ..
        })
    ));

    let salted = Algorithm::legacy_argon2(LegacyArgon2Params::default(), b"somesalt");
    match DigestPrimitive::compute(&salted, b"") {
        Err(err) => assert!(err.to_string().starts_with("legacy-argon2: "), "{}", err),
        Ok(out) => panic!("empty password accepted: {}", hex::encode(out)),
    }
}
