//! Routing configuration via `routing.toml`
//!
//! Declares the named vindexes a keyspace routes through. Each entry names a
//! registered strategy type and carries free-form params that are handed to
//! the strategy's factory untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use keyroute_core::{Error, Result};

use crate::registry::VindexParams;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "routing.toml";

/// One vindex declaration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VindexDef {
    /// Registered strategy name, e.g. `"num_ksid"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Passed verbatim to the strategy's factory
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: VindexParams,
}

impl VindexDef {
    /// Declaration with no params
    pub fn new(kind: impl Into<String>) -> Self {
        VindexDef {
            kind: kind.into(),
            params: VindexParams::new(),
        }
    }
}

/// Routing configuration loaded from `routing.toml`.
///
/// # Example
///
/// ```toml
/// [vindexes.user_id]
/// type = "num_ksid"
///
/// [vindexes.order_id]
/// type = "num_ksid"
/// params = { note = "ignored by num_ksid" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoutingConfig {
    /// Vindex declarations keyed by vindex name
    #[serde(default)]
    pub vindexes: BTreeMap<String, VindexDef>,
}

impl RoutingConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Routing configuration
#
# Each [vindexes.<name>] table declares a named vindex.
#   type   = registered strategy name
#   params = optional table passed to the strategy's factory
#
# num_ksid maps an unsigned 64-bit key to its 8-byte big-endian encoding.
# It accepts params but ignores them.
#
# [vindexes.user_id]
# type = "num_ksid"
"#
    }

    /// Parse config from TOML text
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not a valid routing config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "routing config")
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content, &format!("config file '{}'", path.display()))
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {}", origin, e)))
    }

    /// Add a declaration, replacing any existing one with the same name
    pub fn with_vindex(mut self, name: impl Into<String>, def: VindexDef) -> Self {
        self.vindexes.insert(name.into(), def);
        self
    }
}
