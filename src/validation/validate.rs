//! Validation logic for drawer catalogs.

use crate::config::{PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM};
use crate::parser::{Catalog, RegistryDef};
use std::collections::{HashMap, HashSet};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate every registry and the keys shared between them.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if catalog.registries.is_empty() {
        result.add_warning("Catalog has no registries");
    }

    let mut names = HashSet::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for def in &catalog.registries {
        result.merge(validate_registry(def));

        let name = def.config.name.as_str();
        if !names.insert(name) {
            result.add_error(format!(
                "Registry '{}' is defined twice; its page files would collide",
                name
            ));
        }

        let mut local = HashSet::new();
        for drawer in &def.drawers {
            if !local.insert(drawer.key.as_str()) {
                continue;
            }
            if let Some(first) = owners.insert(drawer.key.as_str(), name) {
                if first != name {
                    result.add_error(format!(
                        "Drawer '{}' is defined in both '{}' and '{}'",
                        drawer.key, first, name
                    ));
                }
            }
        }
    }

    result
}

/// Validate a single registry.
pub fn validate_registry(def: &RegistryDef) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let config = &def.config;
    let name = if config.name.is_empty() {
        result.add_error("Registry with empty name");
        "<unnamed>"
    } else {
        config.name.as_str()
    };

    for (field, value) in [
        ("length", config.length),
        ("width", config.width),
        ("height", config.height),
        ("font_height", config.font_height),
    ] {
        if value.is_nan() || value <= 0.0 {
            result.add_error(format!("{}: invalid {} ({})", name, field, value));
        }
    }

    if config.page_capacity == 0 {
        result.add_error(format!("{}: page_capacity must be at least 1", name));
    }

    if config.full_page_height() > PAGE_HEIGHT_MM {
        result.add_warning(format!(
            "{}: {} drawers of width {} do not fit on a {} mm page",
            name, config.page_capacity, config.width, PAGE_HEIGHT_MM
        ));
    }

    if PAGE_MARGIN_MM + config.outline_length() > PAGE_WIDTH_MM {
        result.add_warning(format!(
            "{}: drawer outline ({} mm) is wider than the page",
            name,
            config.outline_length()
        ));
    }

    if def.drawers.is_empty() {
        result.add_warning(format!("{}: no drawers", name));
    }

    let mut seen = HashSet::new();
    for drawer in &def.drawers {
        if drawer.key.is_empty() {
            result.add_error(format!("{}: drawer with empty key", name));
            continue;
        }
        if !seen.insert(drawer.key.as_str()) {
            result.add_warning(format!(
                "{}: drawer '{}' is defined more than once; the last one is used",
                name, drawer.key
            ));
        }
        if drawer.num_front_lines() > config.front_rows as usize {
            result.add_warning(format!(
                "{}: drawer '{}' has {} front lines but only {} rows",
                name,
                drawer.key,
                drawer.num_front_lines(),
                config.front_rows
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryConfig;
    use crate::model::DrawerEntry;

    fn create_registry(name: &str, keys: &[&str]) -> RegistryDef {
        RegistryDef {
            config: RegistryConfig {
                name: name.into(),
                length: 116.0,
                width: 49.0,
                height: 12.0,
                font_height: 4.0,
                front_rows: 2,
                page_capacity: 5,
            },
            drawers: keys
                .iter()
                .map(|k| DrawerEntry::new(*k, vec!["a".into(), "b".into()]))
                .collect(),
        }
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_registry tests ====================

    #[test]
    fn test_valid_registry() {
        let result = validate_registry(&create_registry("Electronics", &["a", "b"]));
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut def = create_registry("Electronics", &["a"]);
        def.config.width = 0.0;
        def.config.font_height = f64::NAN;
        let result = validate_registry(&def);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("invalid width")));
        assert!(result.errors.iter().any(|e| e.contains("invalid font_height")));
    }

    #[test]
    fn test_zero_capacity() {
        let mut def = create_registry("Electronics", &["a"]);
        def.config.page_capacity = 0;
        let result = validate_registry(&def);
        assert!(!result.passed);
    }

    #[test]
    fn test_too_many_front_lines_warns() {
        let mut def = create_registry("Electronics", &[]);
        def.drawers.push(DrawerEntry::new(
            "x",
            vec!["1".into(), "2".into(), "3".into()],
        ));
        let result = validate_registry(&def);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("3 front lines")));
    }

    #[test]
    fn test_page_overflow_warns() {
        let mut def = create_registry("Electronics", &["a"]);
        def.config.page_capacity = 6;
        let result = validate_registry(&def);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("do not fit")));
    }

    #[test]
    fn test_duplicate_key_within_registry_warns() {
        let result = validate_registry(&create_registry("Electronics", &["a", "a"]));
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    // ==================== validate_catalog tests ====================

    #[test]
    fn test_duplicate_key_across_registries() {
        let catalog = Catalog {
            registries: vec![
                create_registry("Electronics", &["a", "b"]),
                create_registry("Hardware", &["b"]),
            ],
        };
        let result = validate_catalog(&catalog);
        assert!(!result.passed);
        assert!(result.errors[0].contains("'b'"));
    }

    #[test]
    fn test_duplicate_registry_name() {
        let catalog = Catalog {
            registries: vec![
                create_registry("Electronics", &["a"]),
                create_registry("Electronics", &["b"]),
            ],
        };
        let result = validate_catalog(&catalog);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("defined twice")));
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        let result = validate_catalog(&catalog);
        assert!(result.passed, "{:?}", result.errors);
    }
}
