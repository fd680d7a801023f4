//! RegistryCollection - Ordered set of registries sharing one print run.

use super::{discard_pages, LabelRegistry, PageFile};
use crate::assemble::Converter;
use crate::error::{LabelError, Result};
use crate::model::DrawerEntry;
use std::path::Path;

/// Ordered list of registries. A key is claimed by the first registry that has it.
#[derive(Debug, Default)]
pub struct RegistryCollection {
    registries: Vec<LabelRegistry>,
}

impl RegistryCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registry.
    ///
    /// Fails if any of its keys is already defined by an earlier registry.
    pub fn add(&mut self, registry: LabelRegistry) -> Result<()> {
        for entry in registry.drawers() {
            if let Some(owner) = self.owner_of(&entry.key) {
                return Err(LabelError::DuplicateKey {
                    key: entry.key.clone(),
                    first: owner.name().to_string(),
                    second: registry.name().to_string(),
                });
            }
        }
        self.registries.push(registry);
        Ok(())
    }

    /// Queue `key` in the first registry that knows it.
    pub fn request(&mut self, key: &str) -> bool {
        self.registries.iter_mut().any(|r| r.request(key))
    }

    /// Finalize every registry in order and concatenate their pages.
    ///
    /// On error the PDFs produced by earlier registries are removed.
    pub fn finalize(&mut self, work_dir: &Path, converter: &dyn Converter) -> Result<Vec<PageFile>> {
        let mut files = Vec::new();
        for registry in &mut self.registries {
            match registry.finalize(work_dir, converter) {
                Ok(pages) => files.extend(pages),
                Err(e) => {
                    discard_pages(&files);
                    return Err(e);
                }
            }
        }
        Ok(files)
    }

    /// Find a drawer by key.
    pub fn lookup(&self, key: &str) -> Option<(&LabelRegistry, &DrawerEntry)> {
        self.registries
            .iter()
            .find_map(|r| r.get(key).map(|entry| (r, entry)))
    }

    fn owner_of(&self, key: &str) -> Option<&LabelRegistry> {
        self.registries.iter().find(|r| r.contains(key))
    }

    /// Registries in order.
    pub fn registries(&self) -> &[LabelRegistry] {
        &self.registries
    }

    /// Total number of pending keys across all registries.
    pub fn num_pending(&self) -> usize {
        self.registries.iter().map(|r| r.pending().len()).sum()
    }
}
