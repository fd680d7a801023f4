//! Page document generation.

mod render;

pub use render::{escape_text, render_page, RenderContext};
