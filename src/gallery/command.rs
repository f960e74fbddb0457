use crate::domain::{CategoryFilter, SortMode, ViewMode};

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetFilter(CategoryFilter),
    CycleFilter,
    /// Settled search term, already debounced.
    SetSearch(String),
    SetSort(SortMode),
    CycleSort,
    SetView(ViewMode),
    ToggleView,
    GoToPage(usize),
    PrevPage,
    NextPage,
    /// Open the detail overlay for the entry with this id.
    OpenDetail(String),
    OpenImage {
        url: String,
        caption: String,
    },
    CloseDetail,
    CloseImage,
    /// Close the topmost overlay.
    Escape,
}

/// What changed after applying a [`Command`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Filter and sort ran again.
    pub requeried: bool,
    /// A different page is showing; the items area should scroll to the top.
    pub page_changed: bool,
}
