//! Configuration constants and settings for label generation.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Conversion factor: inch to mm.
pub const CONV_MM_INCH: f64 = 25.4;

/// Page width (8 inch) in mm.
pub const PAGE_WIDTH_MM: f64 = 8.0 * CONV_MM_INCH;

/// Page height (10 inch) in mm.
pub const PAGE_HEIGHT_MM: f64 = 10.0 * CONV_MM_INCH;

/// Offset of the first drawer from the top-left corner of the page.
pub const PAGE_MARGIN_MM: f64 = 3.0;

/// Outline stroke color.
pub const STROKE_COLOR: &str = "black";

/// Outline stroke width.
pub const STROKE_WIDTH: &str = ".1mm";

/// Label font family.
pub const FONT_FAMILY: &str = "sans-serif";

/// Label font size.
pub const FONT_SIZE: &str = "1.2mm";

/// Label fill color.
pub const TEXT_FILL: &str = "black";

/// Default name of the merged output document.
pub const DEFAULT_OUTPUT: &str = "labels.pdf";

/// Default SVG to PDF converter program.
pub const DEFAULT_INKSCAPE: &str = "inkscape";

/// Default PDF merge program.
pub const DEFAULT_PDFUNITE: &str = "pdfunite";

/// Physical dimensions and page parameters shared by every drawer of a registry.
///
/// All lengths are in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry name, also the prefix of its page files.
    pub name: String,
    /// Length of the drawer body.
    pub length: f64,
    /// Drawer width; also the vertical band each drawer occupies on a page.
    pub width: f64,
    /// Drawer height; also the width of the end-cap region.
    pub height: f64,
    /// Font height used for line spacing.
    pub font_height: f64,
    /// Number of front text rows.
    pub front_rows: u32,
    /// Maximum drawers per page.
    pub page_capacity: usize,
}

impl RegistryConfig {
    /// Spacing between successive front lines.
    pub fn inter_line(&self) -> f64 {
        (self.height + self.font_height) / f64::from(self.front_rows + 1)
    }

    /// Horizontal extent of one drawer outline.
    pub fn outline_length(&self) -> f64 {
        self.height + self.length
    }

    /// Vertical extent of a page filled to capacity, margin included.
    pub fn full_page_height(&self) -> f64 {
        PAGE_MARGIN_MM + self.page_capacity as f64 * self.width
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}

/// Formatting of numbers written into SVG attributes.
pub mod fmt {
    /// Format a coordinate with at most 4 decimals and no trailing zeros.
    pub fn format_coord(value: f64) -> String {
        let s = format!("{:.4}", value);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        if s == "-0" {
            "0".to_string()
        } else {
            s.to_string()
        }
    }
}
