use std::fmt;

use serde::{Deserialize, Serialize};

/// Content category of an entry.
///
/// Known codes get a friendly display name; anything else is kept verbatim
/// so that a listing with a new category still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Lab,
    Event,
    Research,
    Other(String),
}

impl Category {
    /// Categories offered as filter choices, in display order.
    pub const KNOWN: [Category; 3] = [Category::Lab, Category::Event, Category::Research];

    pub fn code(&self) -> &str {
        match self {
            Category::Lab => "lab",
            Category::Event => "event",
            Category::Research => "research",
            Category::Other(code) => code,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Category::Lab => "Laboratory",
            Category::Event => "Events",
            Category::Research => "Research Activities",
            Category::Other(code) => code,
        }
    }
}

impl From<String> for Category {
    fn from(code: String) -> Self {
        match code.as_str() {
            "lab" => Category::Lab,
            "event" => Category::Event,
            "research" => Category::Research,
            _ => Category::Other(code),
        }
    }
}

impl From<&str> for Category {
    fn from(code: &str) -> Self {
        Category::from(code.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The category filter selected by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn accepts(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Advance to the next filter button: all, then each known category.
    pub fn next(&self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::Lab),
            CategoryFilter::Only(Category::Lab) => CategoryFilter::Only(Category::Event),
            CategoryFilter::Only(Category::Event) => CategoryFilter::Only(Category::Research),
            CategoryFilter::Only(_) => CategoryFilter::All,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        match value {
            "all" | "" => CategoryFilter::All,
            code => CategoryFilter::Only(Category::from(code)),
        }
    }
}
