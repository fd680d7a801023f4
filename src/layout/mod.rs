//! Page batching and drawer layout.

mod batch;
mod drawer;
mod page;

pub use batch::{chunk_count, chunk_keys};
pub use drawer::DrawerLayout;
pub use page::{PageLayout, PlacedDrawer};
