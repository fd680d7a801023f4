//! drawer-labels - Printable labels for small-parts storage drawers.
//!
//! A catalog maps drawer keys to a few lines of text. For every requested
//! key the drawer outline is drawn with its front text rotated inside the
//! end-cap, drawers are stacked onto 8 x 10 inch pages, each page is
//! converted to PDF and the pages are merged into one document.
//!
//! # Example
//!
//! ```no_run
//! use drawer_labels::{Catalog, DocumentAssembler, InkscapeConverter, PdfUnite};
//!
//! let mut collection = Catalog::builtin().unwrap().build().unwrap();
//! let converter = InkscapeConverter::default();
//! let merger = PdfUnite::default();
//! let assembler = DocumentAssembler::new(&converter, &merger, ".", "labels.pdf");
//! assembler.assemble(&mut collection, &["hw8hn", "hw8fw"]).unwrap();
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod model;
pub mod parser;
pub mod registry;
pub mod validation;

// Re-exports for convenience
pub use assemble::{AssemblyReport, Converter, DocumentAssembler, InkscapeConverter, Merger, PdfUnite};
pub use config::RegistryConfig;
pub use error::{LabelError, Result, ToolError};
pub use generator::{render_page, RenderContext};
pub use layout::{DrawerLayout, PageLayout};
pub use model::DrawerEntry;
pub use parser::{load_catalog, parse_catalog, Catalog};
pub use registry::{LabelRegistry, PageFile, RegistryCollection};
pub use validation::{validate_catalog, ValidationResult};
