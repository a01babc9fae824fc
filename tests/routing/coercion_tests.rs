//! Key normalization as seen through map and verify
//!
//! Both operations must agree on every input: whatever `map` accepts,
//! `verify` accepts with the same value, and whatever `map` rejects,
//! `verify` rejects too.

use crate::test_utils::*;
use keyroute::{KeyValue, KeyspaceId};

fn cases() -> Vec<(KeyValue, Option<u64>)> {
    vec![
        (KeyValue::Uint(0), Some(0)),
        (KeyValue::Uint(u64::MAX), Some(u64::MAX)),
        (KeyValue::Int(-1), Some(u64::MAX)),
        (KeyValue::Int(i64::MIN), Some(1 << 63)),
        (KeyValue::from(-1i32), Some(u64::MAX)),
        (KeyValue::from("1234"), Some(1234)),
        (KeyValue::from("18446744073709551615"), Some(u64::MAX)),
        (KeyValue::from(b"0042".as_slice()), Some(42)),
        (KeyValue::from(""), None),
        (KeyValue::from("-1"), None),
        (KeyValue::from("+1"), None),
        (KeyValue::from("1e3"), None),
        (KeyValue::from("18446744073709551616"), None),
        (KeyValue::Null, None),
        (KeyValue::Bool(false), None),
        (KeyValue::Float(0.0), None),
    ]
}

#[test]
fn map_and_verify_agree() {
    let vindex = num_ksid();
    let unique = vindex.as_unique().unwrap();
    let probe = KeyspaceId::from_u64(0);

    for (input, expected) in cases() {
        let mapped = unique.map(&(), std::slice::from_ref(&input));
        let verified = unique.verify(&(), &input, &probe);

        match expected {
            Some(n) => {
                assert_eq!(mapped.unwrap(), vec![KeyspaceId::from_u64(n)], "{:?}", input);
                assert_eq!(verified.unwrap(), n == 0, "{:?}", input);
            }
            None => {
                assert!(mapped.unwrap_err().is_type_coercion(), "{:?}", input);
                assert!(verified.unwrap_err().is_type_coercion(), "{:?}", input);
            }
        }
    }
}

#[test]
fn json_values_route_like_native_ones() {
    let vindex = num_ksid();
    let unique = vindex.as_unique().unwrap();

    let from_json: Vec<KeyValue> = serde_json::from_str::<Vec<serde_json::Value>>(r#"[1234, "1234", -1]"#)
        .unwrap()
        .into_iter()
        .map(KeyValue::from)
        .collect();

    let out = unique.map(&(), &from_json).unwrap();
    assert_eq!(out[0], KeyspaceId::from_u64(1234));
    assert_eq!(out[1], KeyspaceId::from_u64(1234));
    assert_eq!(out[2], KeyspaceId::from_u64(u64::MAX));
}
