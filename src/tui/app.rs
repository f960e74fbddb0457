use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use crate::domain::{Entry, ViewMode};
use crate::gallery::{Command, Gallery, Outcome, OverlayKind};

const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerTarget {
    Prev,
    Next,
    Page(usize),
}

/// Clickable regions recorded during the last draw.
#[derive(Debug, Default)]
pub struct HitMap {
    pub items: Vec<(Rect, String)>,
    pub pager: Vec<(Rect, PagerTarget)>,
    pub detail_box: Option<Rect>,
    pub detail_images: Vec<(Rect, usize)>,
    pub image_box: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Terminal-side state wrapped around the [`Gallery`] controller.
pub struct TuiApp {
    pub gallery: Gallery,
    pub input_mode: InputMode,
    /// Search text as typed; the gallery only sees it once settled.
    pub search_input: String,
    /// Selected item on the current page.
    pub cursor: usize,
    /// First visible row of the items area.
    pub offset: usize,
    /// Selected image in the detail overlay.
    pub image_cursor: usize,
    pub detail_scroll: u16,
    pub grid_columns: usize,
    pub should_quit: bool,
    pub status_message: Option<(String, Instant)>,
    pub hits: HitMap,
}

impl TuiApp {
    pub fn new(gallery: Gallery, grid_columns: u16) -> Self {
        let search_input = gallery.state().search.clone();
        Self {
            gallery,
            input_mode: InputMode::Browse,
            search_input,
            cursor: 0,
            offset: 0,
            image_cursor: 0,
            detail_scroll: 0,
            grid_columns: usize::from(grid_columns.max(1)),
            should_quit: false,
            status_message: None,
            hits: HitMap::default(),
        }
    }

    /// Apply a command to the gallery and fix up terminal-side state.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let opens_detail = matches!(command, Command::OpenDetail(_));
        let outcome = self.gallery.apply(command);
        if outcome.page_changed {
            self.scroll_to_top();
        }
        if opens_detail {
            self.image_cursor = 0;
            self.detail_scroll = 0;
        }
        outcome
    }

    pub fn scroll_to_top(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn page_len(&self) -> usize {
        self.gallery.page_info().range().len()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.gallery.page_entries().get(self.cursor).copied()
    }

    /// Move the item cursor by `delta`, clamped to the current page.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.page_len();
        if len == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn move_up(&mut self) {
        match self.gallery.state().view {
            ViewMode::List => self.move_cursor(-1),
            ViewMode::Grid => self.move_cursor(-(self.grid_columns as isize)),
        }
    }

    pub fn move_down(&mut self) {
        match self.gallery.state().view {
            ViewMode::List => self.move_cursor(1),
            ViewMode::Grid => self.move_cursor(self.grid_columns as isize),
        }
    }

    /// Keep the cursor row inside a window of `visible_rows`.
    pub fn ensure_visible(&mut self, cursor_row: usize, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if cursor_row < self.offset {
            self.offset = cursor_row;
        } else if cursor_row >= self.offset + visible_rows {
            self.offset = cursor_row + 1 - visible_rows;
        }
    }

    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_entry().map(|entry| entry.id.clone()) {
            self.apply(Command::OpenDetail(id));
        }
    }

    pub fn move_image_cursor(&mut self, delta: isize) {
        let count = self.gallery.detail().map_or(0, |entry| entry.images.len());
        if count == 0 {
            return;
        }
        let target = self.image_cursor as isize + delta;
        self.image_cursor = target.clamp(0, count as isize - 1) as usize;
    }

    /// Command that opens the image at `index` of the detailed entry.
    pub fn image_command(&self, index: usize) -> Option<Command> {
        let entry = self.gallery.detail()?;
        let url = entry.images.get(index)?;
        Some(Command::OpenImage {
            url: url.clone(),
            caption: entry.title.clone(),
        })
    }

    pub fn open_selected_image(&mut self) {
        if let Some(command) = self.image_command(self.image_cursor) {
            self.apply(command);
        }
    }

    /// Translate a left click at (`column`, `row`) into a command.
    ///
    /// With an overlay open, only the topmost overlay reacts; a click outside
    /// its box closes it.
    pub fn command_for_click(&self, column: u16, row: u16) -> Option<Command> {
        let at = Position::new(column, row);
        let inside = |rect: &Rect| rect.contains(at);

        match self.gallery.overlays().active() {
            Some(OverlayKind::Image) => match &self.hits.image_box {
                Some(rect) if inside(rect) => None,
                _ => Some(Command::CloseImage),
            },
            Some(OverlayKind::Detail) => {
                if !self.hits.detail_box.as_ref().is_some_and(inside) {
                    return Some(Command::CloseDetail);
                }
                self.hits
                    .detail_images
                    .iter()
                    .find(|(rect, _)| inside(rect))
                    .and_then(|(_, index)| self.image_command(*index))
            }
            None => {
                if let Some((_, id)) = self.hits.items.iter().find(|(rect, _)| inside(rect)) {
                    return Some(Command::OpenDetail(id.clone()));
                }
                self.hits
                    .pager
                    .iter()
                    .find(|(rect, _)| inside(rect))
                    .map(|(_, target)| match target {
                        PagerTarget::Prev => Command::PrevPage,
                        PagerTarget::Next => Command::NextPage,
                        PagerTarget::Page(n) => Command::GoToPage(*n),
                    })
            }
        }
    }

    /// Select the item under a click before its detail opens.
    pub fn select_item(&mut self, id: &str) {
        if let Some(index) = self
            .gallery
            .page_entries()
            .iter()
            .position(|entry| entry.id == id)
        {
            self.cursor = index;
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn status(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some((_, since)) = &self.status_message {
            if now.duration_since(*since) >= STATUS_TTL {
                self.status_message = None;
            }
        }
    }
}
