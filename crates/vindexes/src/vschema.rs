//! Named vindex instances built from a routing config
//!
//! The planner resolves a column's vindex by name here and then asks for the
//! capability it needs. Instances are created once and shared across
//! sessions as `Arc<dyn Vindex>`.

use std::collections::BTreeMap;
use std::sync::Arc;

use keyroute_core::{Error, Result, Reversible, Unique, Vindex};
use tracing::info;

use crate::config::RoutingConfig;
use crate::registry::VindexRegistry;

/// Vindex instances keyed by the name they were declared under
#[derive(Debug, Clone, Default)]
pub struct VSchema {
    vindexes: BTreeMap<String, Arc<dyn Vindex>>,
}

impl VSchema {
    /// Instantiate every vindex declared in `config`
    ///
    /// # Errors
    ///
    /// Returns the first error hit, either `UnknownVindexType` for a type
    /// missing from `registry` or an error from a factory. No partially
    /// built schema is returned.
    pub fn build(config: &RoutingConfig, registry: &VindexRegistry) -> Result<Self> {
        let mut vindexes = BTreeMap::new();
        for (name, def) in &config.vindexes {
            let vindex: Arc<dyn Vindex> = Arc::from(registry.create(&def.kind, &def.params)?);
            info!(name = %name, type_name = vindex.type_name(), cost = vindex.cost(), "Built vindex");
            vindexes.insert(name.clone(), vindex);
        }
        Ok(VSchema { vindexes })
    }

    /// Look up a vindex by name
    pub fn vindex(&self, name: &str) -> Option<&Arc<dyn Vindex>> {
        self.vindexes.get(name)
    }

    /// Look up a vindex by name and require the `Unique` capability
    ///
    /// # Errors
    ///
    /// Returns `UnknownVindex` or `UnsupportedCapability`.
    pub fn unique(&self, name: &str) -> Result<&dyn Unique> {
        self.require(name)?
            .as_unique()
            .ok_or_else(|| Error::UnsupportedCapability {
                name: name.to_string(),
                capability: "Unique".to_string(),
            })
    }

    /// Look up a vindex by name and require the `Reversible` capability
    ///
    /// # Errors
    ///
    /// Returns `UnknownVindex` or `UnsupportedCapability`.
    pub fn reversible(&self, name: &str) -> Result<&dyn Reversible> {
        self.require(name)?
            .as_reversible()
            .ok_or_else(|| Error::UnsupportedCapability {
                name: name.to_string(),
                capability: "Reversible".to_string(),
            })
    }

    /// Declared vindex names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vindexes.keys().map(String::as_str)
    }

    /// Number of declared vindexes
    pub fn len(&self) -> usize {
        self.vindexes.len()
    }

    /// True if nothing is declared
    pub fn is_empty(&self) -> bool {
        self.vindexes.is_empty()
    }

    fn require(&self, name: &str) -> Result<&dyn Vindex> {
        self.vindexes
            .get(name)
            .map(|v| &**v)
            .ok_or_else(|| Error::UnknownVindex {
                name: name.to_string(),
            })
    }
}
