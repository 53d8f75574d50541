//! End-to-end behaviour of the semantic ID codec.

use std::hash::{BuildHasher, RandomState};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use semid::{IdError, SemanticIdCodec, Uuid, MAX_BYTES_ID_SIZE};

fn codec(names: &[&str]) -> SemanticIdCodec {
    SemanticIdCodec::for_prefix_names(names.iter().copied()).unwrap()
}

fn prefixes() -> Vec<SemanticIdCodec> {
    vec![
        codec(&[]),
        codec(&["foo1"]),
        codec(&["Foo1", "Account"]),
        codec(&["my", "nested", "Entity"]),
    ]
}

fn shuffle_case(s: &str, rng: &mut StdRng) -> String {
    s.chars()
        .map(|ch| {
            if rng.random_bool(0.5) {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

#[test]
fn test_literal_scenarios() {
    assert_eq!(codec(&["foo1"]).encode_long(1), "foo1-1");
    assert_eq!(codec(&[]).decode_long("n"), Ok(21));
    assert_eq!(codec(&["foo1", "account"]).encode_long(1), "foo1-account-1");
    assert!(codec(&["foo1"]).decode_long("foo1-").unwrap_err().is_malformed());
    assert!(!codec(&["foo1", "account"]).can_decode("bar1-account-1"));
}

#[test]
fn test_zero_is_single_symbol() {
    assert_eq!(codec(&[]).encode_long(0), "0");
    assert_eq!(codec(&["foo1"]).encode_long(0), "foo1-0");
}

#[test]
fn test_boundary_longs() {
    for c in prefixes() {
        for value in [0, 1, 1000, i64::MAX, i64::MIN, -1, -1000] {
            let id = c.encode_long(value);
            assert_eq!(c.decode_long(&id), Ok(value), "{c}");
            assert_eq!(c.decode_long(&id.to_uppercase()), Ok(value), "{c}");
            assert_eq!(c.decode_long(&id.to_lowercase()), Ok(value), "{c}");
        }
    }
}

#[test]
fn test_variable_length_byte_ids() {
    let c = codec(&["book1"]);
    let ids: Vec<Vec<u8>> = vec![
        vec![0],
        vec![1],
        vec![0xff],
        vec![0x7f],
        vec![0x80],
        vec![0, 0],
        vec![1, 0x7f],
        vec![0x80, 0xff],
        vec![0x80, 0x80, 0x80],
        vec![0x7f, 0x7f, 0x7f],
        vec![1, 1, 1, 1, 1],
        vec![1, 0xff, 127, 63, 0xbd],
    ];

    for id in ids {
        let encoded = c.encode_bytes(&id).unwrap();
        assert_eq!(c.decode_bytes(&encoded), Ok(id));
    }
}

#[test]
fn test_mixed_case_byte_ids() {
    let c = codec(&["book1"]);
    let mut rng = StdRng::seed_from_u64(34_287_562_345);

    for size in 1..=MAX_BYTES_ID_SIZE {
        let mut id = vec![0u8; size];
        rng.fill(id.as_mut_slice());

        let encoded = c.encode_bytes(&id).unwrap();
        let mixed = shuffle_case(&encoded, &mut rng);
        assert_eq!(c.decode_bytes(&mixed), Ok(id));
    }
}

#[test]
fn test_random_byte_ids_decode_to_requested_size() {
    let c = codec(&["My", "Codec"]);
    let mut rng = StdRng::seed_from_u64(123_124);

    for size in 1..=MAX_BYTES_ID_SIZE {
        let id = c.encode_random_bytes(&mut rng, size).unwrap();
        assert_eq!(c.decode_bytes(&id).unwrap().len(), size);
        assert_eq!(c.decode_bytes_with_size(&id, size).unwrap().len(), size);
    }
}

#[test]
fn test_random_byte_ids_vary() {
    let c = codec(&["tok"]);
    let mut rng = StdRng::seed_from_u64(7);
    let first = c.encode_random_bytes(&mut rng, 16).unwrap();
    let second = c.encode_random_bytes(&mut rng, 16).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_invalid_arguments() {
    let c = codec(&["Codec"]);
    let mut rng = StdRng::seed_from_u64(1);

    let errors = [
        c.encode_bytes(&[]).unwrap_err(),
        c.encode_bytes(&vec![1; MAX_BYTES_ID_SIZE + 1]).unwrap_err(),
        c.encode_random_bytes(&mut rng, 0).unwrap_err(),
        c.encode_random_bytes(&mut rng, MAX_BYTES_ID_SIZE + 1).unwrap_err(),
        c.decode_bytes_with_size("Codec-10", 0).unwrap_err(),
        SemanticIdCodec::for_prefix_names([""]).unwrap_err(),
    ];
    for err in errors {
        assert!(matches!(err, IdError::InvalidArgument { .. }), "{err}");
    }
}

#[test]
fn test_can_decode_gates_every_decode() {
    let c = codec(&["foo1", "user"]);
    let rejected = [
        "",
        "foo1-user-",
        "foo1-user",
        "foo2-user-1",
        "foo1-item-1",
        "foo1-user-1-2",
        "foo1.user.1",
        "1",
    ];

    for id in rejected {
        assert!(!c.can_decode(id), "{id}");
        assert!(c.decode_long(id).unwrap_err().is_malformed(), "{id}");
        assert!(c.decode_bytes(id).unwrap_err().is_malformed(), "{id}");
        assert!(
            c.decode_bytes_with_size(id, 8).unwrap_err().is_malformed(),
            "{id}"
        );
        assert!(c.decode_uuid(id).unwrap_err().is_malformed(), "{id}");
    }
}

#[test]
fn test_malformed_error_carries_context() {
    let c = codec(&["foo1", "user"]);
    match c.decode_long("foo2-user-1") {
        Err(IdError::MalformedId {
            id,
            expected_prefix,
            reason,
        }) => {
            assert_eq!(id, "foo2-user-1");
            assert_eq!(expected_prefix, "foo1-user-");
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_differently_cased_codecs() {
    let lower = codec(&["foo1", "user"]);
    let upper = codec(&["FOO1", "USER"]);
    assert_ne!(lower, upper);

    let uuid = Uuid::from_u64_pair(1, 2);
    assert_eq!(upper.decode_uuid(&lower.encode_uuid(uuid)), Ok(uuid));
    assert_eq!(
        lower.decode_bytes(&upper.encode_bytes(&[9, 8, 7]).unwrap()),
        Ok(vec![9, 8, 7])
    );

    let state = RandomState::new();
    let same = codec(&["foo1", "user"]);
    assert_eq!(lower, same);
    assert_eq!(state.hash_one(&lower), state.hash_one(&same));
}

#[test]
fn test_codec_json_roundtrip() {
    let c = codec(&["Foo1", "Account"]);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"["Foo1","Account"]"#);

    let parsed: SemanticIdCodec = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, c);
    assert_eq!(parsed.encode_long(1), "Foo1-Account-1");

    let empty: SemanticIdCodec = serde_json::from_str("[]").unwrap();
    assert_eq!(empty.encode_long(21), "n");

    assert!(serde_json::from_str::<SemanticIdCodec>(r#"["foo1",""]"#).is_err());
}

#[test]
fn test_codec_is_shareable_across_threads() {
    let c = std::sync::Arc::new(codec(&["foo1"]));
    let handles: Vec<_> = (0..4i64)
        .map(|n| {
            let c = std::sync::Arc::clone(&c);
            std::thread::spawn(move || c.decode_long(&c.encode_long(n * 1000)))
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(n as i64 * 1000));
    }
}

proptest! {
    #[test]
    fn prop_long_roundtrip(value in any::<i64>(), index in 0usize..4) {
        let codecs = prefixes();
        let c = &codecs[index];
        let id = c.encode_long(value);
        prop_assert!(c.can_decode(&id));
        prop_assert_eq!(c.decode_long(&id), Ok(value));
        prop_assert_eq!(c.decode_long(&id.to_uppercase()), Ok(value));
        prop_assert_eq!(c.decode_long(&id.to_lowercase()), Ok(value));
    }

    #[test]
    fn prop_bytes_roundtrip(
        bytes in proptest::collection::vec(any::<u8>(), 1..=MAX_BYTES_ID_SIZE),
        index in 0usize..4,
    ) {
        let codecs = prefixes();
        let c = &codecs[index];
        let id = c.encode_bytes(&bytes).unwrap();
        prop_assert_eq!(c.decode_bytes(&id.to_uppercase()), Ok(bytes.clone()));
        prop_assert_eq!(c.decode_bytes_with_size(&id, bytes.len()), Ok(bytes));
    }

    #[test]
    fn prop_uuid_roundtrip(high in any::<u64>(), low in any::<u64>(), index in 0usize..4) {
        let codecs = prefixes();
        let c = &codecs[index];
        let uuid = Uuid::from_u64_pair(high, low);
        let id = c.encode_uuid(uuid);
        prop_assert_eq!(c.decode_uuid(&id), Ok(uuid));
        prop_assert_eq!(c.decode_uuid(&id.to_uppercase()), Ok(uuid));
        prop_assert_eq!(c.decode_uuid(&id.to_lowercase()), Ok(uuid));
    }

    #[test]
    fn prop_failed_frame_means_failed_decode(input in "[a-z0-9$.-]{0,20}") {
        let c = codec(&["foo1"]);
        if !c.can_decode(&input) {
            prop_assert!(c.decode_long(&input).is_err());
            prop_assert!(c.decode_bytes(&input).is_err());
            prop_assert!(c.decode_uuid(&input).is_err());
        }
    }
}
