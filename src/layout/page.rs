//! Placement of drawers on a page.

use super::DrawerLayout;
use crate::config::{RegistryConfig, PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM};
use crate::model::{DrawerEntry, Point};
use serde::Serialize;

/// A drawer positioned on a page.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedDrawer {
    /// Drawer key.
    pub key: String,
    /// Top-left corner of the outline.
    pub origin: Point,
    /// Outline and text geometry at `origin`.
    pub layout: DrawerLayout,
}

/// One page of drawers stacked top to bottom.
#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    /// Page width in mm.
    pub width: f64,
    /// Page height in mm.
    pub height: f64,
    /// Drawers in chunk order.
    pub drawers: Vec<PlacedDrawer>,
}

impl PageLayout {
    /// Origin of the drawer at `index` within its page.
    pub fn origin_for(config: &RegistryConfig, index: usize) -> Point {
        Point::new(PAGE_MARGIN_MM, PAGE_MARGIN_MM + index as f64 * config.width)
    }

    /// Lay out a chunk of drawers on a fresh page.
    pub fn compose<'a, I>(config: &RegistryConfig, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a DrawerEntry>,
    {
        let drawers = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let origin = Self::origin_for(config, index);
                PlacedDrawer {
                    key: entry.key.clone(),
                    origin,
                    layout: DrawerLayout::compute(config, entry, origin),
                }
            })
            .collect();

        Self {
            width: PAGE_WIDTH_MM,
            height: PAGE_HEIGHT_MM,
            drawers,
        }
    }

    /// Number of drawers on the page.
    pub fn len(&self) -> usize {
        self.drawers.len()
    }

    /// Check if the page holds no drawers.
    pub fn is_empty(&self) -> bool {
        self.drawers.is_empty()
    }
}
