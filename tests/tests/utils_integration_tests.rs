//! End-to-end use of the text helpers: configuration, salted records,
//! encoders and keyed helpers

use std::io::Cursor;

use shanext_algorithms::registry::Algorithm;
use shanext_utils::config::{HashConfig, DEFAULT_CONFIG_FILE};
use shanext_utils::encoding::{base64_decode, base64_encode, hex_decode_to_string, hex_encode_str};
use shanext_utils::keyed::{hmac_sha256_hex, pbkdf2_sha256, verify_hmac_sha256, verify_pbkdf2_sha256};
use shanext_utils::salt::{new_salt, new_salt_from_rng, salt_or_new};
use shanext_utils::{Error, SaltedHash, SaltedHasher};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn configured_hasher_round_trip() {
    let dir = std::env::temp_dir().join(format!("shanext-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(DEFAULT_CONFIG_FILE);
    let _ = std::fs::remove_file(&path);

    let config = HashConfig::load_or_create(&path).unwrap();
    assert_eq!(config, HashConfig::default());
    assert!(path.exists());

    std::fs::write(&path, r#"{"default_algorithm": "SHA_3"}"#).unwrap();
    let hasher = SaltedHasher::from_config(&HashConfig::load(&path).unwrap()).unwrap();
    assert_eq!(hasher.algorithm(), &Algorithm::Sha3_256);
    assert_eq!(
        hasher.hash_hex("abc").unwrap(),
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
    );

    std::fs::write(&path, r#"{"default_algorithm": "CRC32"}"#).unwrap();
    let config = HashConfig::load(&path).unwrap();
    assert!(matches!(SaltedHasher::from_config(&config), Err(Error::Primitive(_))));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn stored_record_survives_text_round_trip() {
    let hasher = SaltedHasher::new(Algorithm::Sha512);
    let record = hasher.generate_salted_hash("hunter2").unwrap();

    let stored = record.to_string();
    let parsed: SaltedHash = stored.parse().unwrap();
    assert_eq!(parsed, record);
    assert_eq!(parsed.digest_hex.len(), 128);
    assert_eq!(base64_decode(&parsed.salt).unwrap().len(), 64);

    assert!(hasher.verify_record("hunter2", &parsed).unwrap());
    assert!(!hasher.verify_record("hunter3", &parsed).unwrap());
    // a record from another algorithm has the wrong length and fails fast
    assert!(!SaltedHasher::default().verify_record("hunter2", &parsed).unwrap());
}

#[test]
fn deterministic_salt_gives_reproducible_record() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let salt = new_salt_from_rng(&mut rng, 16).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    assert_eq!(new_salt_from_rng(&mut rng, 16).unwrap(), salt);

    let hasher = SaltedHasher::default();
    let a = hasher.hash_with_salt("input", &salt).unwrap();
    let b = hasher.hash_with_salt("input", &salt_or_new(&salt)).unwrap();
    assert_eq!(a, b);
    assert_ne!(new_salt(), new_salt());
}

#[test]
fn iterated_and_stream_hashing() {
    let hasher = SaltedHasher::default();
    assert_eq!(
        hasher.hash_with_iterations("abc", "salt", 1).unwrap(),
        "3681099918be28c95b81e27e7e5c2e4c6a6dea566d2d10e7f49139ebb779eb6f"
    );
    assert!(hasher.hash_with_iterations("abc", "salt", 0).is_err());

    let from_reader = hasher.hash_reader(Cursor::new(b"file contents\n")).unwrap();
    assert_eq!(from_reader, hasher.hash_bytes_hex(b"file contents\n").unwrap());
}

#[test]
fn encoders_and_keyed_helpers() {
    let hex = hex_encode_str("shanext").unwrap();
    assert_eq!(hex_decode_to_string(&hex).unwrap(), "shanext");
    assert!(base64_encode(&[]).is_err());

    let tag = hmac_sha256_hex("key", "The quick brown fox jumps over the lazy dog").unwrap();
    assert_eq!(
        tag,
        "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
    );
    assert!(verify_hmac_sha256("key", "The quick brown fox jumps over the lazy dog", &tag).unwrap());

    let key = pbkdf2_sha256("password", b"salt", 1, 32).unwrap();
    assert_eq!(
        hex::encode(&*key),
        "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
    );
    assert!(verify_pbkdf2_sha256("password", b"salt", 1, &key).unwrap());
}
