//! Keyroute - keyspace-id routing strategies for sharded databases
//!
//! A routing strategy ("vindex") maps a column value to the keyspace id
//! (KSID) that decides which shard owns the row. The planner uses
//! strategies through capability traits so every strategy looks the same
//! to it.
//!
//! # Quick Start
//!
//! ```ignore
//! use keyroute::{KeyValue, RoutingConfig, VSchema, VindexRegistry};
//!
//! let registry = VindexRegistry::with_builtins()?;
//! let config = RoutingConfig::from_toml_str(r#"
//!     [vindexes.user_id]
//!     type = "num_ksid"
//! "#)?;
//! let vschema = VSchema::build(&config, &registry)?;
//!
//! let ksids = vschema.unique("user_id")?.map(&(), &[KeyValue::from(1234u64)])?;
//! assert_eq!(ksids[0].to_hex(), "00000000000004d2");
//! ```
//!
//! # Architecture
//!
//! - `keyroute-core`: KSID, key range, key value and the capability traits
//! - `keyroute-vindexes`: the `num_ksid` strategy, the registry and config

pub use keyroute_core::*;
pub use keyroute_vindexes::*;
