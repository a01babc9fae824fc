//! Core types and traits for keyspace-id routing
//!
//! This crate defines the foundational types shared by every routing
//! strategy:
//! - KeyspaceId: binary shard-routing identifier
//! - KeyRange: half-open range of keyspace ids owned by a shard
//! - KeyValue: column value presented to a strategy, with numeric coercion
//! - Error: error type hierarchy
//! - Traits: capability traits (Vindex, Unique, Reversible) and VCursor

#![warn(clippy::all)]

pub mod error;
pub mod key_range;
pub mod keyspace_id;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use key_range::KeyRange;
pub use keyspace_id::{KeyspaceId, NUMERIC_KSID_LEN};
pub use traits::{Reversible, Unique, VCursor, Vindex};
pub use value::KeyValue;
