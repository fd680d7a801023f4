//! Catalog validation.

mod validate;

pub use validate::{validate_catalog, validate_registry, ValidationResult};
