//! Test utilities for the routing suite

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;

use keyroute::{KeyValue, KeyspaceId, Reversible, Unique, VindexRegistry, NUM_KSID};

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so it shows on failure
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A `num_ksid` instance built through the registry, as the planner gets it
pub fn num_ksid() -> Box<dyn keyroute::Vindex> {
    init_tracing();
    VindexRegistry::with_builtins()
        .unwrap()
        .create(NUM_KSID, &Default::default())
        .unwrap()
}

/// Map a single key through `vindex`
pub fn map_one(vindex: &dyn Unique, key: impl Into<KeyValue>) -> KeyspaceId {
    let mut out = vindex.map(&(), &[key.into()]).unwrap();
    assert_eq!(out.len(), 1);
    out.remove(0)
}

/// Reverse-map and unwrap the `u64` key
pub fn reverse_one(vindex: &dyn Reversible, ksid: &KeyspaceId) -> u64 {
    vindex
        .reverse_map(&(), ksid)
        .unwrap()
        .as_uint()
        .expect("num_ksid reverse_map yields Uint")
}

/// Boundary keys every property is checked against
pub const BOUNDARY_KEYS: [u64; 6] = [0, 1, 1234, (1 << 63) - 1, 1 << 63, u64::MAX];
