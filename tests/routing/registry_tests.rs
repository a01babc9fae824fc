//! Registry tests
//!
//! The registry is built explicitly at startup and frozen; these tests
//! check construction by name and the num_ksid factory contract.

use crate::test_utils::*;
use keyroute::{
    Error, NumKsid, Result, Vindex, VindexParams, VindexRegistry, NUM_KSID,
};

#[test]
fn num_ksid_registered_under_well_known_name() {
    init_tracing();
    let registry = VindexRegistry::with_builtins().unwrap();
    assert_eq!(NUM_KSID, "num_ksid");
    assert!(registry.contains("num_ksid"));
}

#[test]
fn factory_ignores_arbitrary_params() {
    let registry = VindexRegistry::with_builtins().unwrap();

    let mut params = VindexParams::new();
    params.insert("table".to_string(), serde_json::json!("users"));
    params.insert("nested".to_string(), serde_json::json!({"a": [1, 2, 3]}));
    params.insert("null".to_string(), serde_json::Value::Null);

    let with_params = registry.create(NUM_KSID, &params).unwrap();
    let without = registry.create(NUM_KSID, &VindexParams::new()).unwrap();

    assert_eq!(with_params.cost(), without.cost());
    assert_eq!(
        map_one(with_params.as_unique().unwrap(), 77u64),
        map_one(without.as_unique().unwrap(), 77u64)
    );
}

#[test]
fn unknown_type_is_rejected() {
    let registry = VindexRegistry::with_builtins().unwrap();
    match registry.create("lookup_hash", &VindexParams::new()) {
        Err(Error::UnknownVindexType { name }) => assert_eq!(name, "lookup_hash"),
        other => panic!("expected UnknownVindexType, got {:?}", other),
    }
}

#[test]
fn custom_registry_can_alias_num_ksid() {
    let registry = VindexRegistry::builder()
        .register(NUM_KSID, NumKsid::create)
        .unwrap()
        .register("numeric", NumKsid::create)
        .unwrap()
        .build();

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["num_ksid", "numeric"]);
    let vindex = registry.create("numeric", &VindexParams::new()).unwrap();
    assert_eq!(vindex.type_name(), NUM_KSID);
}

#[test]
fn duplicate_registration_is_rejected() {
    fn other(_params: &VindexParams) -> Result<Box<dyn Vindex>> {
        Ok(Box::new(NumKsid::new()))
    }

    let err = VindexRegistry::builder()
        .register(NUM_KSID, NumKsid::create)
        .unwrap()
        .register(NUM_KSID, other)
        .err()
        .unwrap();
    assert_eq!(
        err,
        Error::DuplicateVindexType {
            name: NUM_KSID.to_string()
        }
    );
}
