//! Derives the visible slice of the gallery from the loaded entries and the
//! current [`ViewState`].
//!
//! ```text
//! entries → filter → stable sort → paginate
//! ```
//!
//! Every step is a pure function. Intermediate results are indices into the
//! loaded collection so that a derived view never holds copies of entries.

pub mod pagination;

use std::cmp::Ordering;
use std::ops::Range;

use crate::domain::{CategoryFilter, Entry, SortMode, ViewState};

pub use pagination::{PageControl, Pagination};

pub const PAGE_SIZE: usize = 10;

/// Position of the current page within the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based current page.
    pub current: usize,
    /// Zero when there are no results.
    pub total_pages: usize,
    pub total_items: usize,
}

impl PageInfo {
    pub fn new(total_items: usize, page: usize) -> Self {
        Self {
            current: page.max(1),
            total_pages: total_pages(total_items),
            total_items,
        }
    }

    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.current >= self.total_pages
    }

    pub fn range(&self) -> Range<usize> {
        page_range(self.total_items, self.current)
    }
}

/// Current page of entries plus its position.
#[derive(Debug)]
pub struct Derived<'a> {
    pub entries: Vec<&'a Entry>,
    pub page: PageInfo,
}

/// Filter, sort and paginate `entries` according to `state`.
pub fn derive<'a>(entries: &'a [Entry], state: &ViewState) -> Derived<'a> {
    let order = select(entries, state);
    let page = PageInfo::new(order.len(), state.page);
    let entries = order[page.range()].iter().map(|&i| &entries[i]).collect();
    Derived { entries, page }
}

/// Filtered and sorted indices into `entries`, before pagination.
pub fn select(entries: &[Entry], state: &ViewState) -> Vec<usize> {
    let mut order = filter(entries, &state.filter, &state.search);
    sort(entries, &mut order, state.sort);
    tracing::debug!(
        "Query filter={:?} search={:?} sort={} matched {} of {}",
        state.filter,
        state.search,
        state.sort,
        order.len(),
        entries.len()
    );
    order
}

/// Indices of published entries in the filter's category that match `search`.
///
/// The search term is lowercased but otherwise used as typed.
pub fn filter(entries: &[Entry], category: &CategoryFilter, search: &str) -> Vec<usize> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            entry.published && category.accepts(&entry.category) && entry.matches_search(&needle)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Stable sort of `order` (indices into `entries`) by `mode`.
pub fn sort(entries: &[Entry], order: &mut [usize], mode: SortMode) {
    order.sort_by(|&a, &b| {
        let (a, b) = (&entries[a], &entries[b]);
        match mode {
            SortMode::DateDesc => b.date.cmp(&a.date),
            SortMode::DateAsc => a.date.cmp(&b.date),
            SortMode::TitleAsc => compare_titles(&a.title, &b.title),
            SortMode::TitleDesc => compare_titles(&b.title, &a.title),
        }
    });
}

/// Case-folded comparison with the raw string as tie-breaker, so "apple"
/// sorts next to "Apple" rather than after "Zebra".
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Index range of `page` (1-based) within `count` items, clamped to bounds.
pub fn page_range(count: usize, page: usize) -> Range<usize> {
    let start = (page.max(1) - 1).saturating_mul(PAGE_SIZE).min(count);
    let end = (start + PAGE_SIZE).min(count);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{entry, numbered};
    use crate::domain::{Category, ViewMode};
    use crate::source::fallback::fallback_entries;

    fn titles(derived: &Derived) -> Vec<String> {
        derived.entries.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_unpublished_never_appear() {
        let mut entries = numbered(15);
        entries[3].published = false;
        entries[12].published = false;
        let hidden = [entries[3].id.clone(), entries[12].id.clone()];

        for sort in SortMode::ALL {
            for page in 1..=2 {
                for search in ["", "entry", "1"] {
                    let state = ViewState {
                        sort,
                        page,
                        search: search.into(),
                        ..ViewState::default()
                    };
                    let derived = derive(&entries, &state);
                    assert!(derived.entries.iter().all(|e| !hidden.contains(&e.id)));
                }
            }
        }
    }

    #[test]
    fn test_category_filter_is_exact() {
        let entries = fallback_entries();
        let order = filter(&entries, &CategoryFilter::Only(Category::Event), "");
        assert_eq!(order.len(), 3);
        assert!(order
            .iter()
            .all(|&i| entries[i].category == Category::Event));
    }

    #[test]
    fn test_all_filter_returns_every_published_entry() {
        let mut entries = fallback_entries();
        entries[0].published = false;
        let order = filter(&entries, &CategoryFilter::All, "");
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_bug_finds_single_entry() {
        let entries = fallback_entries();
        let state = ViewState {
            search: "bug".into(),
            ..ViewState::default()
        };
        let derived = derive(&entries, &state);
        assert_eq!(titles(&derived), vec!["Bug Monitoring System Setup"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let entries = fallback_entries();
        let lower = filter(&entries, &CategoryFilter::All, "asabe");
        let upper = filter(&entries, &CategoryFilter::All, "ASABE");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_search_matches_tags() {
        let entries = fallback_entries();
        let order = filter(&entries, &CategoryFilter::All, "outreach");
        assert_eq!(order.len(), 1);
        assert_eq!(entries[order[0]].title, "Lab Festival Participation");
    }

    #[test]
    fn test_date_desc_and_asc_are_reversed() {
        let entries = fallback_entries();
        let mut desc = filter(&entries, &CategoryFilter::All, "");
        let mut asc = desc.clone();
        sort(&entries, &mut desc, SortMode::DateDesc);
        sort(&entries, &mut asc, SortMode::DateAsc);
        asc.reverse();
        assert_eq!(desc, asc);
    }

    #[test]
    fn test_date_sort_is_stable_on_ties() {
        let entries = vec![
            entry("a", "First", "2024-11-01", Category::Lab),
            entry("b", "Second", "2024-11-01", Category::Lab),
            entry("c", "Third", "2024-11-02", Category::Lab),
        ];
        let mut order = vec![0, 1, 2];
        sort(&entries, &mut order, SortMode::DateDesc);
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let entries = vec![
            entry("a", "zebra", "2024-11-01", Category::Lab),
            entry("b", "Apple", "2024-11-01", Category::Lab),
            entry("c", "banana", "2024-11-01", Category::Lab),
        ];
        let mut order = vec![0, 1, 2];
        sort(&entries, &mut order, SortMode::TitleAsc);
        assert_eq!(order, vec![1, 2, 0]);
        sort(&entries, &mut order, SortMode::TitleDesc);
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let entries = numbered(25);
        let state = ViewState {
            page: 3,
            ..ViewState::default()
        };
        let derived = derive(&entries, &state);
        assert_eq!(derived.page.total_pages, 3);
        assert_eq!(derived.entries.len(), 5);
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let entries = fallback_entries();
        let state = ViewState {
            search: "no such thing".into(),
            ..ViewState::default()
        };
        let derived = derive(&entries, &state);
        assert!(derived.entries.is_empty());
        assert_eq!(derived.page.total_pages, 0);
        assert!(derived.page.is_last());
    }

    #[test]
    fn test_event_filter_scenario() {
        let entries = fallback_entries();
        let state = ViewState {
            filter: CategoryFilter::Only(Category::Event),
            ..ViewState::default()
        };
        let derived = derive(&entries, &state);
        assert_eq!(derived.entries.len(), 3);
        assert_eq!(derived.page.current, 1);
        assert_eq!(derived.page.total_pages, 1);
        assert!(!Pagination::from_info(&derived.page).next_enabled);
    }

    #[test]
    fn test_view_mode_does_not_change_selection() {
        let entries = numbered(23);
        let list = ViewState::default();
        let grid = ViewState {
            view: ViewMode::Grid,
            ..ViewState::default()
        };
        assert_eq!(select(&entries, &list), select(&entries, &grid));
    }

    #[test]
    fn test_derived_entries_borrow_from_collection() {
        let entries = fallback_entries();
        let derived = derive(&entries, &ViewState::default());
        for e in derived.entries {
            assert!(entries.iter().any(|orig| std::ptr::eq(orig, e)));
        }
    }

    #[test]
    fn test_page_range_clamps() {
        assert_eq!(page_range(25, 1), 0..10);
        assert_eq!(page_range(25, 3), 20..25);
        assert_eq!(page_range(25, 9), 25..25);
        assert_eq!(page_range(0, 1), 0..0);
        assert_eq!(page_range(5, 0), 0..5);
    }
}
