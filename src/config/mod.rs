//! Configuration management for Vitrine.
//!
//! Configuration is read from `~/.config/vitrine/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::debounce::SEARCH_DEBOUNCE;
use crate::domain::{SortMode, ViewMode};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub gallery: GalleryConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Where entries come from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Listing URL or JSON file path. Unset means the embedded listing.
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 10,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Directory that relative image references resolve against.
    pub asset_root: Option<PathBuf>,
    pub search_debounce_ms: u64,
    pub default_sort: SortMode,
    pub default_view: ViewMode,
    pub grid_columns: u16,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            asset_root: None,
            search_debounce_ms: SEARCH_DEBOUNCE.as_millis() as u64,
            default_sort: SortMode::DateDesc,
            default_view: ViewMode::List,
            grid_columns: 3,
        }
    }
}

impl GalleryConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Resolve an image reference to something the system opener accepts.
    pub fn resolve_image(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return reference.to_string();
        }
        match &self.asset_root {
            Some(root) => root.join(reference).display().to_string(),
            None => reference.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, creating a commented default there if
    /// nothing exists yet.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            tracing::info!("Created default config at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/vitrine/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("vitrine").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Vitrine Configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1", "/"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"
# Digits 1-9 jump straight to that page unless bound here.

[source]
# Entry listing: an http(s) URL returning a JSON array, or a JSON file path.
# Leave unset to use the built-in gallery.
# url = "https://example.com/gallery/entries.json"

# Request timeout in seconds (single attempt, no retries)
timeout_secs = 10

[gallery]
# Directory that relative image paths are resolved against when opening
# an image in the system viewer.
# asset_root = "/srv/www/site"

# Quiet period after the last keystroke before a search runs
search_debounce_ms = 300

# date-desc, date-asc, title-asc, title-desc
default_sort = "date-desc"

# list or grid
default_view = "list"

# Cards per row in grid view
grid_columns = 3

[colors]
active_border = "Cyan"
inactive_border = "DarkGray"

# Selected item
selection_bg = "Cyan"
selection_fg = "Black"

# Item text
title = "White"
description = "Gray"
badge_fg = "Black"
badge_bg = "Green"
tag = "LightBlue"
metadata = "Yellow"
image_ref = "DarkGray"

# Pager
pager_active = "Cyan"
pager_disabled = "DarkGray"

overlay_border = "LightCyan"
search = "LightYellow"

# Status bar
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
move_left = ["h", "Left"]
move_right = ["l", "Right"]
next_page = ["n", "PageDown"]
prev_page = ["p", "PageUp"]

# Open the detail view, or the selected image inside it
select = ["Enter"]
# Close the topmost overlay
back = ["Esc"]
close = ["x"]

search = ["/"]
cycle_filter = ["f"]
cycle_sort = ["s"]
toggle_view = ["v"]
# Open the current image in the system viewer
open_external = ["o"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
