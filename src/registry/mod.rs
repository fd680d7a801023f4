//! Drawer registries and the print queue.

mod collection;
#[allow(clippy::module_inception)]
mod registry;

pub use collection::RegistryCollection;
pub use registry::{discard_pages, LabelRegistry, PageFile};
