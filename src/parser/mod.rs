//! Catalog parsing.

mod catalog;

pub use catalog::{load_catalog, parse_catalog, Catalog, RegistryDef, DEFAULT_CATALOG};
