pub mod category;
pub mod entry;
pub mod view;

pub use category::{Category, CategoryFilter};
pub use entry::Entry;
pub use view::{SortMode, ViewMode, ViewState};

#[cfg(test)]
pub(crate) mod fixtures;
