//! Concurrency tests
//!
//! A vindex instance is shared by every planner session. Calls carry no
//! state, so concurrent callers must see exactly the single-threaded results.

use std::sync::Arc;
use std::thread;

use crate::test_utils::*;
use keyroute::{KeyValue, KeyspaceId, RoutingConfig, VSchema, VindexDef, VindexRegistry};

#[test]
fn shared_instance_across_threads() {
    init_tracing();
    let config = RoutingConfig::default().with_vindex("user_id", VindexDef::new("num_ksid"));
    let registry = VindexRegistry::with_builtins().unwrap();
    let vschema = Arc::new(VSchema::build(&config, &registry).unwrap());

    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let vschema = Arc::clone(&vschema);
            thread::spawn(move || {
                let unique = vschema.unique("user_id").unwrap();
                let reversible = vschema.reversible("user_id").unwrap();
                for i in 0..1_000u64 {
                    let key = t.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(i);
                    let ksids = unique.map(&(), &[KeyValue::from(key)]).unwrap();
                    assert_eq!(ksids[0], KeyspaceId::from_u64(key));
                    assert!(unique.verify(&(), &KeyValue::from(key), &ksids[0]).unwrap());
                    assert_eq!(
                        reversible.reverse_map(&(), &ksids[0]).unwrap(),
                        KeyValue::Uint(key)
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn vindex_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}
    assert_send_sync::<dyn keyroute::Vindex>();
    assert_send_sync::<VSchema>();
    assert_send_sync::<VindexRegistry>();
    assert_send_sync::<keyroute::NumKsid>();
}
