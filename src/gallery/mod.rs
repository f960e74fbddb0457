//! The gallery controller.
//!
//! [`Gallery`] owns the loaded entries, the session's [`ViewState`] and the
//! overlay state. Every user interaction arrives as a [`Command`]; applying
//! it updates the state and re-derives the visible page synchronously.

mod command;
mod overlay;

pub use command::{Command, Outcome};
pub use overlay::{ImageView, OverlayKind, Overlays};

use crate::domain::{Entry, ViewState};
use crate::query::{self, PageInfo, Pagination};

pub struct Gallery {
    entries: Vec<Entry>,
    state: ViewState,
    /// Filtered and sorted indices into `entries`.
    order: Vec<usize>,
    overlays: Overlays,
    queries: usize,
}

impl Gallery {
    pub fn new(entries: Vec<Entry>, state: ViewState) -> Self {
        let mut gallery = Self {
            entries,
            state,
            order: Vec::new(),
            overlays: Overlays::default(),
            queries: 0,
        };
        gallery.requery();
        gallery
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    /// Number of times filter and sort have run.
    pub fn queries(&self) -> usize {
        self.queries
    }

    pub fn match_count(&self) -> usize {
        self.order.len()
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.order.len(), self.state.page)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::from_info(&self.page_info())
    }

    /// Entries on the current page, in display order.
    pub fn page_entries(&self) -> Vec<&Entry> {
        self.order[self.page_info().range()]
            .iter()
            .map(|&i| &self.entries[i])
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entry shown in the detail overlay.
    pub fn detail(&self) -> Option<&Entry> {
        self.overlays.detail.map(|i| &self.entries[i])
    }

    pub fn image(&self) -> Option<&ImageView> {
        self.overlays.image.as_ref()
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::SetFilter(filter) => {
                self.state.filter = filter;
                self.requery()
            }
            Command::CycleFilter => {
                self.state.filter = self.state.filter.next();
                self.requery()
            }
            Command::SetSearch(term) => {
                self.state.search = term;
                self.requery()
            }
            Command::SetSort(sort) => {
                self.state.sort = sort;
                self.requery()
            }
            Command::CycleSort => {
                self.state.sort = self.state.sort.next();
                self.requery()
            }
            Command::SetView(view) => {
                self.state.view = view;
                Outcome::default()
            }
            Command::ToggleView => {
                self.state.view = self.state.view.toggle();
                Outcome::default()
            }
            Command::GoToPage(page) => self.go_to_page(page),
            Command::PrevPage => self.go_to_page(self.state.page.saturating_sub(1)),
            Command::NextPage => self.go_to_page(self.state.page + 1),
            Command::OpenDetail(id) => {
                match self.entries.iter().position(|entry| entry.id == id) {
                    Some(index) => self.overlays.open_detail(index),
                    None => tracing::warn!("No entry with id {}", id),
                }
                Outcome::default()
            }
            Command::OpenImage { url, caption } => {
                self.overlays.open_image(ImageView { url, caption });
                Outcome::default()
            }
            Command::CloseDetail => {
                self.overlays.close(OverlayKind::Detail);
                Outcome::default()
            }
            Command::CloseImage => {
                self.overlays.close(OverlayKind::Image);
                Outcome::default()
            }
            Command::Escape => {
                if let Some(top) = self.overlays.active() {
                    self.overlays.close(top);
                }
                Outcome::default()
            }
        }
    }

    fn go_to_page(&mut self, page: usize) -> Outcome {
        let info = self.page_info();
        if page < 1 || page > info.total_pages || page == info.current {
            return Outcome::default();
        }
        self.state.page = page;
        Outcome {
            requeried: false,
            page_changed: true,
        }
    }

    /// Re-run filter and sort, back on the first page.
    fn requery(&mut self) -> Outcome {
        self.order = query::select(&self.entries, &self.state);
        self.state.page = 1;
        self.queries += 1;
        Outcome {
            requeried: true,
            page_changed: true,
        }
    }
}
