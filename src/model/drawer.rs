//! DrawerEntry - One labeled storage drawer.

use serde::{Deserialize, Serialize};

/// One labeled storage drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerEntry {
    /// Unique key within a registry (usually a part code).
    pub key: String,
    /// Lines printed on the drawer front, in stacking order.
    pub front: Vec<String>,
    /// Vendor and stock references for the drawer bottom.
    ///
    /// Kept as catalog metadata; the page layout does not draw them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bottom: Vec<String>,
}

impl DrawerEntry {
    /// Create a new drawer entry without bottom lines.
    pub fn new(key: impl Into<String>, front: Vec<String>) -> Self {
        Self {
            key: key.into(),
            front,
            bottom: Vec::new(),
        }
    }

    /// Set the bottom lines.
    pub fn with_bottom(mut self, bottom: Vec<String>) -> Self {
        self.bottom = bottom;
        self
    }

    /// Check if this drawer has bottom lines.
    pub fn has_bottom(&self) -> bool {
        !self.bottom.is_empty()
    }

    /// Number of front lines.
    pub fn num_front_lines(&self) -> usize {
        self.front.len()
    }
}
