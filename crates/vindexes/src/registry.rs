//! Vindex type registry
//!
//! Maps a strategy name (the `type` in a routing config) to the factory that
//! builds it. The registry is assembled once during startup with
//! [`RegistryBuilder`] and is read-only afterwards; there is no global
//! instance and nothing registers itself at load time.
//!
//! ```ignore
//! use keyroute_vindexes::{NumKsid, VindexRegistry, NUM_KSID};
//!
//! let registry = VindexRegistry::builder()
//!     .register(NUM_KSID, NumKsid::create)?
//!     .build();
//! let vindex = registry.create("num_ksid", &Default::default())?;
//! ```

use std::collections::BTreeMap;
use std::fmt;

use keyroute_core::{Error, Result, Vindex};
use tracing::{debug, info};

use crate::num_ksid::{NumKsid, NUM_KSID};

/// Free-form parameters passed to a factory, taken verbatim from config
pub type VindexParams = BTreeMap<String, serde_json::Value>;

/// Function signature for vindex construction
///
/// Factories are stateless: everything they need comes from `params`.
pub type VindexFactory = fn(&VindexParams) -> Result<Box<dyn Vindex>>;

/// Accumulates factories before the registry is frozen
#[derive(Default)]
pub struct RegistryBuilder {
    factories: BTreeMap<String, VindexFactory>,
}

impl RegistryBuilder {
    /// Register `factory` under `name`
    ///
    /// # Errors
    ///
    /// Returns `DuplicateVindexType` if `name` is already taken.
    pub fn register(mut self, name: impl Into<String>, factory: VindexFactory) -> Result<Self> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(Error::DuplicateVindexType { name });
        }
        info!(name = %name, "Registered vindex type");
        self.factories.insert(name, factory);
        Ok(self)
    }

    /// Register every strategy this crate ships
    ///
    /// # Errors
    ///
    /// Returns `DuplicateVindexType` if a builtin name is already taken.
    pub fn register_builtins(self) -> Result<Self> {
        self.register(NUM_KSID, NumKsid::create)
    }

    /// Freeze the registry
    pub fn build(self) -> VindexRegistry {
        VindexRegistry {
            factories: self.factories,
        }
    }
}

/// Read-only mapping from strategy name to factory
pub struct VindexRegistry {
    factories: BTreeMap<String, VindexFactory>,
}

impl VindexRegistry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry holding every strategy this crate ships
    pub fn with_builtins() -> Result<Self> {
        Ok(Self::builder().register_builtins()?.build())
    }

    /// Build a vindex of type `type_name`
    ///
    /// # Errors
    ///
    /// Returns `UnknownVindexType` if no factory is registered under
    /// `type_name`, or whatever the factory itself returns.
    pub fn create(&self, type_name: &str, params: &VindexParams) -> Result<Box<dyn Vindex>> {
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| Error::UnknownVindexType {
                name: type_name.to_string(),
            })?;
        debug!(type_name, params = params.len(), "Creating vindex");
        factory(params)
    }

    /// True if a factory is registered under `type_name`
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered strategy names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered strategies
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for VindexRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VindexRegistry")
            .field("types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
