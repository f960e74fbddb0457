//! # Vitrine
//!
//! A terminal browser for a small content gallery: posts with a category,
//! a date, images and tags.
//!
//! ## Architecture
//!
//! Vitrine loads its listing once and derives every view from it:
//!
//! ```text
//! Loader → View State → Query Engine → Presenter
//! ```
//!
//! - [`source`]: loads the listing from HTTP or a file, falling back to the embedded one
//! - [`query`]: filtering, sorting and pagination
//! - [`gallery`]: the controller that owns entries, view state and overlays
//! - [`tui`]: Terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the embedded gallery
//! vitrine
//!
//! # Browse a remote listing
//! vitrine --source https://example.com/gallery.json
//!
//! # Print the second page of events, oldest first
//! vitrine list --category event --sort date-asc --page 2
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the loader to the
/// loaded configuration.
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/vitrine/config.toml`, supporting:
/// - Listing source and timeout
/// - Gallery defaults (sort, view, grid columns, search debounce)
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Command-line interface using clap.
///
/// - `tui` - Launch the TUI (default)
/// - `list` - Print one page of entries
/// - `show <id>` - Print a single entry
pub mod cli;

/// Trailing-edge debouncing for search input.
pub mod debounce;

/// Core domain models.
///
/// - [`Entry`](domain::Entry): a gallery post
/// - [`Category`](domain::Category) and [`CategoryFilter`](domain::CategoryFilter)
/// - [`ViewState`](domain::ViewState): filter, search, sort, view and page
pub mod domain;

/// The gallery controller.
///
/// Applies [`Command`](gallery::Command)s to the view state and keeps the
/// derived order and open overlays in sync.
pub mod gallery;

/// Filter, sort and paginate.
pub mod query;

/// Listing sources.
///
/// - [`EntrySource`](source::EntrySource): Async trait for loading entries
/// - [`HttpSource`](source::HttpSource): reqwest-based implementation
/// - [`FileSource`](source::FileSource): local JSON listing
/// - [`Loader`](source::Loader): one attempt, then the embedded listing
pub mod source;

/// Terminal user interface.
///
/// Toolbar, items area (list or grid), pager and status bar, with detail
/// and image overlays on top.
///
/// Keybindings: j/k navigate, / searches, f cycles the category filter,
/// s cycles the sort, v toggles list/grid, n/p page, Enter opens, q quits.
pub mod tui;
