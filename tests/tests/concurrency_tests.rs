//! Independent hasher instances on separate threads

use std::sync::Arc;
use std::thread;

use shanext_algorithms::hash::{HashFunction, Sha256};
use shanext_algorithms::kdf::{scrypt, LegacyArgon2, LegacyArgon2Params};
use shanext_algorithms::registry::Algorithm;
use shanext_utils::salted::SaltedHasher;

#[test]
fn registry_is_shareable_across_threads() {
    let algorithms: Vec<Algorithm> = ["MD5", "SHA_1", "SHA_256", "SHA_3", "WHIRLPOOL", "SHAKE128"]
        .iter()
        .map(|name| Algorithm::from_name(name).unwrap())
        .collect();
    let data = Arc::new(b"shared input".repeat(100));

    let expected: Vec<Vec<u8>> = algorithms
        .iter()
        .map(|a| a.compute(&data).unwrap())
        .collect();

    let handles: Vec<_> = algorithms
        .into_iter()
        .map(|algorithm| {
            let data = Arc::clone(&data);
            thread::spawn(move || {
                (0..20)
                    .map(|_| algorithm.compute(&data).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        for digest in handle.join().unwrap() {
            assert_eq!(digest, expected);
        }
    }
}

#[test]
fn interleaved_hashers_do_not_share_state() {
    let handles: Vec<_> = (0u8..8)
        .map(|i| {
            thread::spawn(move || {
                let chunk = vec![i; 1000];
                let mut h = Sha256::new();
                for _ in 0..10 {
                    h.update(&chunk).unwrap();
                }
                (i, h.finalize().unwrap().as_ref().to_vec())
            })
        })
        .collect();

    for handle in handles {
        let (i, digest) = handle.join().unwrap();
        let whole = vec![i; 10_000];
        assert_eq!(digest, Sha256::digest(&whole).unwrap().as_ref().to_vec());
    }
}

#[test]
fn kdfs_are_deterministic_under_contention() {
    let reference = scrypt(b"password", b"salt", 16, 2, 1, 32).unwrap().to_vec();
    let legacy = LegacyArgon2::hash(b"password", b"somesalt", &LegacyArgon2Params::default())
        .unwrap()
        .to_vec();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                (
                    scrypt(b"password", b"salt", 16, 2, 1, 32).unwrap().to_vec(),
                    LegacyArgon2::hash(b"password", b"somesalt", &LegacyArgon2Params::default())
                        .unwrap()
                        .to_vec(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (s, l) = handle.join().unwrap();
        assert_eq!(s, reference);
        assert_eq!(l, legacy);
    }
}

#[test]
fn salted_hasher_shared_by_reference() {
    let hasher = Arc::new(SaltedHasher::default());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let hasher = Arc::clone(&hasher);
            thread::spawn(move || {
                let input = format!("user-{}", i);
                let record = hasher.generate_salted_hash(&input).unwrap();
                assert!(hasher.verify_record(&input, &record).unwrap());
                record.to_string()
            })
        })
        .collect();

    let records: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // fresh salts per record
    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
