//! Property-based tests for the digests and the sponge

use proptest::prelude::*;
use shanext_algorithms::hash::md::{LengthEncoding, MdPadding};
use shanext_algorithms::hash::{
    HashFunction, Md5, Ripemd160, Sha1, Sha256, Sha3_256, Sha512, Sha512_224, Whirlpool,
};
use shanext_algorithms::mac::Hmac;
use shanext_algorithms::registry::Algorithm;
use shanext_algorithms::xof::{ExtendableOutputFunction, ShakeXof128};
use shanext_internal::ct_eq;

fn incremental<H: HashFunction>(data: &[u8], split: usize) -> Vec<u8> {
    let split = split.min(data.len());
    let mut h = H::new();
    h.update(&data[..split]).unwrap();
    h.update(&data[split..]).unwrap();
    h.finalize().unwrap().as_ref().to_vec()
}

fn one_shot<H: HashFunction>(data: &[u8]) -> Vec<u8> {
    H::digest(data).unwrap().as_ref().to_vec()
}

proptest! {
    #[test]
    fn split_updates_match_one_shot(
        data in prop::collection::vec(any::<u8>(), 0..600),
        split in 0usize..600,
    ) {
        prop_assert_eq!(incremental::<Md5>(&data, split), one_shot::<Md5>(&data));
        prop_assert_eq!(incremental::<Sha1>(&data, split), one_shot::<Sha1>(&data));
        prop_assert_eq!(incremental::<Sha256>(&data, split), one_shot::<Sha256>(&data));
        prop_assert_eq!(incremental::<Sha512>(&data, split), one_shot::<Sha512>(&data));
        prop_assert_eq!(incremental::<Sha512_224>(&data, split), one_shot::<Sha512_224>(&data));
        prop_assert_eq!(incremental::<Ripemd160>(&data, split), one_shot::<Ripemd160>(&data));
        prop_assert_eq!(incremental::<Whirlpool>(&data, split), one_shot::<Whirlpool>(&data));
        prop_assert_eq!(incremental::<Sha3_256>(&data, split), one_shot::<Sha3_256>(&data));
    }

    #[test]
    fn finalize_resets_the_hasher(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let mut h = Sha256::new();
        h.update(&data).unwrap();
        let first = h.finalize().unwrap().as_ref().to_vec();
        h.update(&data).unwrap();
        let second = h.finalize().unwrap().as_ref().to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn padding_is_minimal_block_multiple(len in 0u64..10_000) {
        for padding in [
            MdPadding::new(64, LengthEncoding::Be64),
            MdPadding::new(64, LengthEncoding::Le64),
            MdPadding::new(128, LengthEncoding::Be128),
            MdPadding::new(64, LengthEncoding::Be256),
        ] {
            let field = padding.length_field.field_len() as u64;
            let block = padding.block_size as u64;
            let padded = padding.padded_len(len);
            prop_assert_eq!(padded % block, 0);
            prop_assert!(padded >= len + 1 + field);
            prop_assert!(padded - block < len + 1 + field);

            let pad = padding.padding_for(len);
            prop_assert_eq!(pad.len() as u64, padded - len);
            prop_assert_eq!(pad[0], 0x80);
        }
    }

    #[test]
    fn shake_squeeze_is_a_stream(
        data in prop::collection::vec(any::<u8>(), 0..400),
        first in 1usize..300,
        second in 1usize..300,
    ) {
        let whole = ShakeXof128::generate(&data, first + second).unwrap();

        let mut xof = ShakeXof128::new();
        xof.update(&data).unwrap();
        let mut a = xof.squeeze_into_vec(first).unwrap();
        let b = xof.squeeze_into_vec(second).unwrap();
        a.extend_from_slice(&b);

        prop_assert_eq!(a, whole);
    }

    #[test]
    fn shake_prefixes_agree(data in prop::collection::vec(any::<u8>(), 0..200), len in 1usize..400) {
        let short = ShakeXof128::generate(&data, len).unwrap();
        let long = ShakeXof128::generate(&data, len + 17).unwrap();
        prop_assert_eq!(&long[..len], &short[..]);
    }

    #[test]
    fn registry_matches_direct_calls(data in prop::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(Algorithm::Sha256.compute(&data).unwrap(), one_shot::<Sha256>(&data));
        prop_assert_eq!(Algorithm::Whirlpool.compute(&data).unwrap(), one_shot::<Whirlpool>(&data));
        prop_assert_eq!(
            Algorithm::Shake128 { output_len: 48 }.compute(&data).unwrap(),
            ShakeXof128::generate(&data, 48).unwrap()
        );
    }

    #[test]
    fn hmac_verify_accepts_own_tag(
        key in prop::collection::vec(any::<u8>(), 0..200),
        msg in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let tag = Hmac::<Sha256>::mac(&key, &msg).unwrap();
        prop_assert!(Hmac::<Sha256>::verify(&key, &msg, &tag).unwrap());

        let mut forged = tag.clone();
        forged[0] ^= 1;
        prop_assert!(!Hmac::<Sha256>::verify(&key, &msg, &forged).unwrap());
    }

    #[test]
    fn ct_eq_agrees_with_eq(
        a in prop::collection::vec(any::<u8>(), 0..64),
        b in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assert_eq!(ct_eq(&a, &b), a == b);
        prop_assert!(ct_eq(&a, &a));
    }
}
