//! Data model types for drawer labels.

mod drawer;
mod geometry;

pub use drawer::DrawerEntry;
pub use geometry::{Point, Segment, TextPlacement};
