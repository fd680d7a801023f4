//! PDF conversion, merging and the top-level print driver.

mod assembler;
mod tools;

pub use assembler::{AssemblyReport, DocumentAssembler};
pub use tools::{run_command, Converter, InkscapeConverter, Merger, PdfUnite};
