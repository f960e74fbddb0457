use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Category;

/// A single gallery post.
///
/// Entries are immutable once loaded; derived views refer back to the loaded
/// collection instead of cloning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Body text, possibly with inline markup.
    #[serde(default)]
    pub content: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub author: String,
    pub category: Category,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl Entry {
    /// Case-insensitive match against title, description, content and tags.
    ///
    /// `needle` must already be lowercased. An empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Long-form date, e.g. "November 5, 2024".
    pub fn display_date(&self) -> String {
        format_long_date(self.date)
    }

    pub fn category_name(&self) -> &str {
        self.category.display_name()
    }

    /// Body text with markup removed, for terminal display.
    pub fn display_content(&self) -> String {
        strip_markup(&self.content)
    }
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Drop tags, decode entities and collapse whitespace.
pub fn strip_markup(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;
    let mut last_was_space = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => {
                if c.is_whitespace() {
                    if !last_was_space {
                        result.push(' ');
                        last_was_space = true;
                    }
                } else {
                    result.push(c);
                    last_was_space = false;
                }
            }
            _ => {}
        }
    }

    html_escape::decode_html_entities(result.trim()).to_string()
}
