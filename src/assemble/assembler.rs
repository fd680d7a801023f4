//! Top-level print driver: validate requests, render pages, produce one PDF.

use super::{Converter, Merger};
use crate::error::{LabelError, Result};
use crate::registry::{discard_pages, RegistryCollection};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// What a successful run produced.
#[derive(Debug, Default, PartialEq)]
pub struct AssemblyReport {
    /// Final document, if anything was printed.
    pub output: Option<PathBuf>,
    /// Number of pages in the final document.
    pub pages: usize,
    /// Number of drawers printed.
    pub drawers: usize,
}

/// Drives one print run from requested keys to the final document.
pub struct DocumentAssembler<'a> {
    converter: &'a dyn Converter,
    merger: &'a dyn Merger,
    work_dir: PathBuf,
    output: PathBuf,
}

impl<'a> DocumentAssembler<'a> {
    /// Create an assembler writing intermediates to `work_dir` and the result to `output`.
    pub fn new(
        converter: &'a dyn Converter,
        merger: &'a dyn Merger,
        work_dir: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            converter,
            merger,
            work_dir: work_dir.into(),
            output: output.into(),
        }
    }

    /// Final document path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Print `keys` from `collection`.
    ///
    /// Nothing is rendered unless every key is recognized.
    pub fn assemble<S: AsRef<str>>(
        &self,
        collection: &mut RegistryCollection,
        keys: &[S],
    ) -> Result<AssemblyReport> {
        let mut unrecognized = Vec::new();
        for key in keys {
            let key = key.as_ref();
            if collection.lookup(key).is_none() {
                warn!("No drawer named '{}'", key);
                unrecognized.push(key.to_string());
            }
        }
        if !unrecognized.is_empty() {
            return Err(LabelError::UnrecognizedKeys { keys: unrecognized });
        }

        for key in keys {
            collection.request(key.as_ref());
        }

        let pages = collection.finalize(&self.work_dir, self.converter)?;
        let drawers = pages.iter().map(|p| p.keys.len()).sum();

        let failed: Vec<PathBuf> = pages
            .iter()
            .filter(|p| !p.is_converted())
            .map(|p| p.path.clone())
            .collect();
        if !failed.is_empty() {
            discard_pages(&pages);
            return Err(LabelError::ConversionFailed { pages: failed });
        }

        let files: Vec<PathBuf> = pages.into_iter().map(|p| p.path).collect();
        match files.as_slice() {
            [] => {
                info!("Nothing to print");
                return Ok(AssemblyReport::default());
            }
            [single] => {
                move_file(single, &self.output)?;
            }
            _ => {
                if let Err(e) = self.merger.merge(&files, &self.output) {
                    error!("{}", e);
                    return Err(e.into());
                }
                for file in &files {
                    std::fs::remove_file(file)?;
                }
            }
        }

        info!(
            "Generated: {} ({} page(s), {} drawer(s))",
            self.output.display(),
            files.len(),
            drawers
        );

        Ok(AssemblyReport {
            output: Some(self.output.clone()),
            pages: files.len(),
            drawers,
        })
    }
}

/// Move `from` to `to`, copying when a plain rename is not possible
/// (for instance across filesystems).
fn move_file(from: &Path, to: &Path) -> Result<()> {
    move_file_with(from, to, |a, b| std::fs::rename(a, b))
}

fn move_file_with<F>(from: &Path, to: &Path, rename: F) -> Result<()>
where
    F: Fn(&Path, &Path) -> std::io::Result<()>,
{
    if let Err(e) = rename(from, to) {
        debug!("Rename {} failed ({}), copying", from.display(), e);
        std::fs::copy(from, to)?;
        std::fs::remove_file(from)?;
    }
    Ok(())
}
