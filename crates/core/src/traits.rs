//! Capability traits for routing strategies
//!
//! The planner works with every routing strategy (a "vindex") through these
//! traits and never through concrete types. Capabilities are layered:
//!
//! - [`Vindex`]: every strategy. Reports its type name and planner cost, and
//!   exposes which richer capabilities it has.
//! - [`Unique`]: each key maps to exactly one keyspace id.
//! - [`Reversible`]: the key can be recovered from its keyspace id.
//!
//! The planner asks for a capability with [`Vindex::as_unique`] /
//! [`Vindex::as_reversible`] and falls back to scatter queries when it is
//! missing.

use std::fmt::Debug;

use crate::error::Result;
use crate::keyspace_id::KeyspaceId;
use crate::value::KeyValue;

/// Opaque routing context supplied by the planner
///
/// Strategies that need to run lookup queries use it to reach the
/// keyspace. Pure computational strategies ignore it. `()` is the empty
/// context.
pub trait VCursor: Send + Sync {}

impl VCursor for () {}

/// Base trait implemented by every routing strategy
///
/// Thread safety: instances are shared by all sessions of the planner, so
/// all methods must be callable concurrently (requires Send + Sync).
pub trait Vindex: Debug + Send + Sync {
    /// Name the strategy is registered under
    fn type_name(&self) -> &'static str;

    /// Planner cost hint; lower is cheaper. 0 means pure computation.
    fn cost(&self) -> u32;

    /// View this vindex as [`Unique`] if it has that capability
    fn as_unique(&self) -> Option<&dyn Unique> {
        None
    }

    /// View this vindex as [`Reversible`] if it has that capability
    fn as_reversible(&self) -> Option<&dyn Reversible> {
        None
    }
}

/// A strategy that maps each key to exactly one keyspace id
pub trait Unique: Vindex {
    /// Check whether `id` maps to `ksid`
    ///
    /// # Errors
    ///
    /// Returns an error if `id` cannot be interpreted by this strategy.
    fn verify(&self, cursor: &dyn VCursor, id: &KeyValue, ksid: &KeyspaceId) -> Result<bool>;

    /// Map a batch of keys to keyspace ids
    ///
    /// The output has the same length and order as `ids`. If any key
    /// fails, the whole call fails and no partial output is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    fn map(&self, cursor: &dyn VCursor, ids: &[KeyValue]) -> Result<Vec<KeyspaceId>>;
}

/// A unique strategy whose keys can be recovered from keyspace ids
pub trait Reversible: Unique {
    /// Recover the key that produced `ksid`
    ///
    /// # Errors
    ///
    /// Returns an error if `ksid` is not a value this strategy produces.
    fn reverse_map(&self, cursor: &dyn VCursor, ksid: &KeyspaceId) -> Result<KeyValue>;
}
