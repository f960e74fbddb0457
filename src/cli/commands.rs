use std::fmt::Write;

use crate::app::{AppContext, Result, VitrineError};
use crate::domain::{CategoryFilter, Entry, SortMode, ViewState};
use crate::query::{self, PageControl, Pagination};

/// Selections for a one-shot listing.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: SortMode,
    pub page: usize,
}

impl ListOptions {
    pub fn view_state(&self) -> ViewState {
        ViewState {
            filter: self
                .category
                .as_deref()
                .map(CategoryFilter::from)
                .unwrap_or_default(),
            search: self.search.clone().unwrap_or_default(),
            sort: self.sort,
            page: self.page.max(1),
            ..ViewState::default()
        }
    }
}

pub async fn list_entries(ctx: &AppContext, options: &ListOptions, json: bool) -> Result<()> {
    let entries = ctx.loader.load().await;
    let state = options.view_state();

    if json {
        let derived = query::derive(&entries, &state);
        println!("{}", serde_json::to_string_pretty(&derived.entries)?);
    } else {
        print!("{}", format_listing(&entries, &state));
    }
    Ok(())
}

pub async fn show_entry(ctx: &AppContext, id: &str) -> Result<()> {
    let entries = ctx.loader.load().await;
    let entry = entries
        .iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| VitrineError::EntryNotFound(id.to_string()))?;

    print!("{}", format_detail(entry));
    Ok(())
}

/// One page of entries followed by the result summary and pager.
pub fn format_listing(entries: &[Entry], state: &ViewState) -> String {
    let derived = query::derive(entries, state);
    let mut out = String::new();

    if derived.entries.is_empty() {
        out.push_str("No entries\n");
    }

    for entry in &derived.entries {
        let _ = writeln!(
            out,
            "{}  {:<20} {} [{}]",
            entry.date.format("%Y-%m-%d"),
            entry.id,
            entry.title,
            entry.category_name()
        );
    }

    let info = derived.page;
    if info.total_pages == 0 {
        out.push_str("\n0 results\n");
        return out;
    }

    let _ = writeln!(
        out,
        "\n{} results, page {} of {}",
        info.total_items, info.current, info.total_pages
    );

    let pagination = Pagination::from_info(&info);
    if pagination.visible {
        let controls: Vec<String> = pagination
            .controls
            .iter()
            .map(|control| match control {
                PageControl::Page { number, active: true } => format!("[{}]", number),
                PageControl::Page { number, .. } => number.to_string(),
                PageControl::Ellipsis => "…".to_string(),
            })
            .collect();
        let _ = writeln!(out, "Pages: {}", controls.join(" "));
    }

    out
}

pub fn format_detail(entry: &Entry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", entry.title);
    let _ = writeln!(
        out,
        "{} · {} · {}",
        entry.display_date(),
        entry.author,
        entry.category_name()
    );
    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(|tag| format!("#{}", tag)).collect();
        let _ = writeln!(out, "{}", tags.join(" "));
    }
    for image in &entry.images {
        let _ = writeln!(out, "  {}", image);
    }
    let _ = writeln!(out, "\n{}", entry.display_content());
    out
}
