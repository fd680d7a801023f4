//! SVG page rendering.

use crate::config::fmt::format_coord;
use crate::config::{FONT_FAMILY, FONT_SIZE, STROKE_COLOR, STROKE_WIDTH, TEXT_FILL};
use crate::error::Result;
use crate::layout::{DrawerLayout, PageLayout};
use crate::model::{Segment, TextPlacement};
use std::path::Path;
use svg::node::element::{Line, Text};
use svg::node::Text as TextNode;
use svg::{Document, Node};
use tracing::debug;

/// Drawing surface for one page.
///
/// Created per page and passed explicitly to the drawing calls; nothing
/// outside the page being rendered can reach it.
pub struct RenderContext {
    document: Document,
    lines: usize,
    texts: usize,
}

impl RenderContext {
    /// Create an empty page of `width` x `height` mm.
    pub fn new(width: f64, height: f64) -> Self {
        let document = Document::new()
            .set("baseProfile", "tiny")
            .set("version", "1.2")
            .set("width", format!("{}mm", format_coord(width)))
            .set("height", format!("{}mm", format_coord(height)))
            .set(
                "viewBox",
                format!("0 0 {} {}", format_coord(width), format_coord(height)),
            );
        Self {
            document,
            lines: 0,
            texts: 0,
        }
    }

    /// Draw a stroked line segment.
    pub fn line(&mut self, segment: &Segment) {
        let line = Line::new()
            .set("x1", format_coord(segment.start.x))
            .set("y1", format_coord(segment.start.y))
            .set("x2", format_coord(segment.end.x))
            .set("y2", format_coord(segment.end.y))
            .set("stroke", STROKE_COLOR)
            .set("stroke-width", STROKE_WIDTH);
        self.document.append(line);
        self.lines += 1;
    }

    /// Draw a centered, rotated line of text.
    pub fn text(&mut self, placement: &TextPlacement) {
        let x = format_coord(placement.anchor.x);
        let y = format_coord(placement.anchor.y);
        let text = Text::new()
            .add(TextNode::new(escape_text(&placement.text)))
            .set("x", x.as_str())
            .set("y", y.as_str())
            .set("font-family", FONT_FAMILY)
            .set("font-size", FONT_SIZE)
            .set("fill", TEXT_FILL)
            .set("text-anchor", "middle")
            .set(
                "transform",
                format!("rotate({} {} {})", format_coord(placement.rotation), x, y),
            );
        self.document.append(text);
        self.texts += 1;
    }

    /// Draw one drawer's outline and labels.
    pub fn draw_drawer(&mut self, layout: &DrawerLayout) {
        for segment in &layout.segments {
            self.line(segment);
        }
        for placement in &layout.texts {
            self.text(placement);
        }
    }

    /// Number of lines drawn so far.
    pub fn num_lines(&self) -> usize {
        self.lines
    }

    /// Number of texts drawn so far.
    pub fn num_texts(&self) -> usize {
        self.texts
    }

    /// Get the underlying SVG document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Write the page to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        svg::save(path, &self.document)?;
        debug!(
            "Wrote {} ({} lines, {} texts)",
            path.display(),
            self.lines,
            self.texts
        );
        Ok(())
    }
}

/// Escape XML markup characters in text content.
///
/// `svg` writes text nodes verbatim.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Render a composed page into a new context.
pub fn render_page(page: &PageLayout) -> RenderContext {
    let mut ctx = RenderContext::new(page.width, page.height);
    for placed in &page.drawers {
        debug!(
            "Drawing '{}' at ({}, {})",
            placed.key,
            format_coord(placed.origin.x),
            format_coord(placed.origin.y)
        );
        ctx.draw_drawer(&placed.layout);
    }
    ctx
}
