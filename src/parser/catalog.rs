//! JSON catalog of registries and their drawers.

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::model::DrawerEntry;
use crate::registry::{LabelRegistry, RegistryCollection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Catalog compiled into the binary.
pub const DEFAULT_CATALOG: &str = include_str!("../../catalog/default.json");

/// One registry as written in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDef {
    #[serde(flatten)]
    pub config: RegistryConfig,
    #[serde(default)]
    pub drawers: Vec<DrawerEntry>,
}

/// Every registry known to a print run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub registries: Vec<RegistryDef>,
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Result<Self> {
        parse_catalog(DEFAULT_CATALOG)
    }

    /// Total number of drawers.
    pub fn num_drawers(&self) -> usize {
        self.registries.iter().map(|r| r.drawers.len()).sum()
    }

    /// Build the registries, in catalog order.
    pub fn build(&self) -> Result<RegistryCollection> {
        let mut collection = RegistryCollection::new();
        for def in &self.registries {
            let mut registry = LabelRegistry::new(def.config.clone())?;
            for drawer in &def.drawers {
                registry.register(drawer.clone());
            }
            debug!("Registry '{}': {} drawer(s)", registry.name(), registry.len());
            collection.add(registry)?;
        }
        Ok(collection)
    }
}

/// Parse a catalog from JSON text.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}
