use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CategoryFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::DateDesc,
        SortMode::DateAsc,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::DateDesc => "date-desc",
            SortMode::DateAsc => "date-asc",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::DateDesc => "Newest first",
            SortMode::DateAsc => "Oldest first",
            SortMode::TitleAsc => "Title A-Z",
            SortMode::TitleDesc => "Title Z-A",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortMode::DateDesc => SortMode::DateAsc,
            SortMode::DateAsc => SortMode::TitleAsc,
            SortMode::TitleAsc => SortMode::TitleDesc,
            SortMode::TitleDesc => SortMode::DateDesc,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("Unknown sort mode: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ViewMode::List),
            "grid" => Ok(ViewMode::Grid),
            _ => Err(format!("Unknown view mode: {}", s)),
        }
    }
}

/// Current filter/search/sort/view/page selections.
///
/// One instance lives for the session, owned by the gallery controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: CategoryFilter,
    pub search: String,
    pub sort: SortMode,
    pub view: ViewMode,
    /// 1-based.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            search: String::new(),
            sort: SortMode::DateDesc,
            view: ViewMode::List,
            page: 1,
        }
    }
}

impl ViewState {
    pub fn with_preferences(sort: SortMode, view: ViewMode) -> Self {
        Self {
            sort,
            view,
            ..Self::default()
        }
    }
}
