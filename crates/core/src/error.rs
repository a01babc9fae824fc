//! Error types for keyspace-id routing
//!
//! All failures surfaced by routing strategies, the registry and the
//! routing configuration are represented by the [`Error`] enum.
//! Errors are:
//! - **Structured**: each variant carries typed fields
//! - **Serializable**: they can cross an API boundary as JSON
//! - **Final**: nothing in this crate retries; errors go straight to the caller

use serde::{Deserialize, Serialize};

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Longest rendering of a rejected value kept in a `TypeCoercion` error
pub const MAX_RENDERED_VALUE_LEN: usize = 64;

/// Routing errors.
///
/// # Categories
///
/// | Category | Variants |
/// |----------|----------|
/// | Input | `TypeCoercion`, `MalformedKeyspaceId`, `InvalidKeyRange`, `InvalidHex` |
/// | Registry | `UnknownVindexType`, `DuplicateVindexType` |
/// | Schema | `UnknownVindex`, `UnsupportedCapability`, `Config` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Input Errors ====================
    /// A key value could not be normalized to an unsigned 64-bit integer
    #[error("could not convert {value} to uint64: {reason}")]
    TypeCoercion { value: String, reason: String },

    /// A keyspace id had the wrong width for the strategy decoding it
    #[error("malformed keyspace id: expected {expected} bytes, got {actual}")]
    MalformedKeyspaceId { expected: usize, actual: usize },

    /// A shard key range could not be parsed
    #[error("invalid key range '{input}': {reason}")]
    InvalidKeyRange { input: String, reason: String },

    /// A hex string could not be decoded
    #[error("invalid hex '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    // ==================== Registry Errors ====================
    /// No factory is registered under the requested strategy name
    #[error("unknown vindex type: {name}")]
    UnknownVindexType { name: String },

    /// A factory was registered twice under the same strategy name
    #[error("vindex type already registered: {name}")]
    DuplicateVindexType { name: String },

    // ==================== Schema Errors ====================
    /// No vindex instance is declared under the requested name
    #[error("vindex not found: {name}")]
    UnknownVindex { name: String },

    /// The vindex exists but does not provide the requested capability
    #[error("vindex {name} is not {capability}")]
    UnsupportedCapability { name: String, capability: String },

    /// The routing configuration could not be read or parsed
    #[error("config error: {reason}")]
    Config { reason: String },
}

impl Error {
    /// Build a `TypeCoercion` error for a value rendered with `Debug`
    ///
    /// Renderings longer than [`MAX_RENDERED_VALUE_LEN`] bytes are cut and
    /// suffixed with `...`.
    pub fn type_coercion(value: impl std::fmt::Debug, reason: impl Into<String>) -> Self {
        let mut value = format!("{:?}", value);
        if value.len() > MAX_RENDERED_VALUE_LEN {
            let cut = (0..=MAX_RENDERED_VALUE_LEN)
                .rev()
                .find(|&i| value.is_char_boundary(i))
                .unwrap_or(0);
            value.truncate(cut);
            value.push_str("...");
        }
        Error::TypeCoercion {
            value,
            reason: reason.into(),
        }
    }

    /// Build a `Config` error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// True if this error came from key normalization
    pub fn is_type_coercion(&self) -> bool {
        matches!(self, Error::TypeCoercion { .. })
    }

    /// True if this error came from decoding a keyspace id of the wrong width
    pub fn is_malformed_keyspace_id(&self) -> bool {
        matches!(self, Error::MalformedKeyspaceId { .. })
    }
}
