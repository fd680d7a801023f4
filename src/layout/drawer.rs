//! Outline and label geometry for a single drawer.
//!
//! A drawer is drawn as a rectangle split by one vertical divider: the
//! narrow end-cap on the left (as wide as the drawer is high) holds the
//! front text, the body on the right is as wide as the drawer is long.
//!
//! ```text
//!  x0      x0+height          x0+height+length
//!  +-------+-------------------------+  y0
//!  | ^ ^   |                         |
//!  | | |   |                         |
//!  +-------+-------------------------+  y0+width
//! ```

use crate::config::RegistryConfig;
use crate::model::{DrawerEntry, Point, Segment, TextPlacement};
use serde::Serialize;

/// Front text is rotated a quarter turn counter-clockwise.
const FRONT_ROTATION: f64 = -90.0;

/// Computed geometry for one drawer at a given origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawerLayout {
    /// Outline segments: two horizontal edges, then three vertical lines.
    pub segments: Vec<Segment>,
    /// Front text placements in line order.
    pub texts: Vec<TextPlacement>,
}

impl DrawerLayout {
    /// Lay out `entry` with its top-left corner at `origin`.
    pub fn compute(config: &RegistryConfig, entry: &DrawerEntry, origin: Point) -> Self {
        let x1 = origin.x;
        let x2 = x1 + config.height;
        let x3 = x2 + config.length;
        let y1 = origin.y;
        let y2 = y1 + config.width / 2.0;
        let y3 = y1 + config.width;

        let segments = vec![
            // Horizontal edges
            Segment::new(Point::new(x1, y1), Point::new(x3, y1)),
            Segment::new(Point::new(x1, y3), Point::new(x3, y3)),
            // Vertical edges and the end-cap divider
            Segment::new(Point::new(x1, y1), Point::new(x1, y3)),
            Segment::new(Point::new(x2, y1), Point::new(x2, y3)),
            Segment::new(Point::new(x3, y1), Point::new(x3, y3)),
        ];

        let inter_line = config.inter_line();
        let texts = entry
            .front
            .iter()
            .enumerate()
            .map(|(i, line)| TextPlacement {
                text: line.clone(),
                anchor: Point::new(x1 + i as f64 * inter_line + config.font_height, y2),
                rotation: FRONT_ROTATION,
            })
            .collect();

        Self { segments, texts }
    }

    /// Bottom-right corner of the outline.
    pub fn extent(&self) -> Point {
        self.segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .fold(Point::default(), |acc, p| {
                Point::new(acc.x.max(p.x), acc.y.max(p.y))
            })
    }
}
