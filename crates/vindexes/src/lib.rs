//! Routing strategies for keyspace-id routing
//!
//! - `num_ksid`: identity mapping of a `u64` key to an 8-byte big-endian KSID
//! - `registry`: strategy name → factory, assembled at startup
//! - `config`: `routing.toml` vindex declarations
//! - `vschema`: named vindex instances built from config and registry

#![warn(clippy::all)]

pub mod config;
pub mod num_ksid;
pub mod registry;
pub mod vschema;

pub use config::{RoutingConfig, VindexDef, CONFIG_FILE_NAME};
pub use num_ksid::{NumKsid, NUM_KSID};
pub use registry::{RegistryBuilder, VindexFactory, VindexParams, VindexRegistry};
pub use vschema::VSchema;
