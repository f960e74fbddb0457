//! Pager model: which page controls to show for a [`PageInfo`].

use super::PageInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page { number: usize, active: bool },
    /// Stands in for one run of hidden pages.
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// False when there is at most one page.
    pub visible: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub controls: Vec<PageControl>,
}

impl Pagination {
    pub fn from_info(info: &PageInfo) -> Self {
        let prev_enabled = !info.is_first();
        let next_enabled = !info.is_last();

        if info.total_pages <= 1 {
            return Self {
                visible: false,
                prev_enabled,
                next_enabled,
                controls: Vec::new(),
            };
        }

        let mut controls = Vec::new();
        for number in 1..=info.total_pages {
            let shown =
                number == 1 || number == info.total_pages || number.abs_diff(info.current) <= 1;
            if shown {
                controls.push(PageControl::Page {
                    number,
                    active: number == info.current,
                });
            } else if controls.last() != Some(&PageControl::Ellipsis) {
                controls.push(PageControl::Ellipsis);
            }
        }

        Self {
            visible: true,
            prev_enabled,
            next_enabled,
            controls,
        }
    }

    /// Page numbers shown, in order, without ellipses.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.controls
            .iter()
            .filter_map(|control| match control {
                PageControl::Page { number, .. } => Some(*number),
                PageControl::Ellipsis => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageControl::{Ellipsis, Page};

    fn page(number: usize) -> PageControl {
        Page {
            number,
            active: false,
        }
    }

    fn active(number: usize) -> PageControl {
        Page {
            number,
            active: true,
        }
    }

    #[test]
    fn test_zero_pages_hidden() {
        let pagination = Pagination::from_info(&PageInfo::new(0, 1));
        assert!(!pagination.visible);
        assert!(!pagination.prev_enabled);
        assert!(!pagination.next_enabled);
        assert!(pagination.controls.is_empty());
    }

    #[test]
    fn test_single_page_hidden_with_next_disabled() {
        let pagination = Pagination::from_info(&PageInfo::new(3, 1));
        assert!(!pagination.visible);
        assert!(!pagination.next_enabled);
    }

    #[test]
    fn test_three_pages_middle_has_no_ellipsis() {
        let pagination = Pagination::from_info(&PageInfo::new(23, 2));
        assert!(pagination.visible);
        assert_eq!(pagination.controls, vec![page(1), active(2), page(3)]);
        assert!(pagination.prev_enabled);
        assert!(pagination.next_enabled);
    }

    #[test]
    fn test_gaps_collapse_to_one_marker_each() {
        let pagination = Pagination::from_info(&PageInfo::new(100, 5));
        assert_eq!(
            pagination.controls,
            vec![
                page(1),
                Ellipsis,
                page(4),
                active(5),
                page(6),
                Ellipsis,
                page(10)
            ]
        );
    }

    #[test]
    fn test_first_page_window() {
        let pagination = Pagination::from_info(&PageInfo::new(100, 1));
        assert_eq!(
            pagination.controls,
            vec![active(1), page(2), Ellipsis, page(10)]
        );
        assert!(!pagination.prev_enabled);
    }

    #[test]
    fn test_last_page_window() {
        let pagination = Pagination::from_info(&PageInfo::new(100, 10));
        assert_eq!(
            pagination.controls,
            vec![page(1), Ellipsis, page(9), active(10)]
        );
        assert!(!pagination.next_enabled);
    }

    #[test]
    fn test_single_hidden_page_uses_ellipsis() {
        let pagination = Pagination::from_info(&PageInfo::new(50, 4));
        assert_eq!(
            pagination.controls,
            vec![page(1), Ellipsis, page(3), active(4), page(5)]
        );
        assert_eq!(pagination.page_numbers(), vec![1, 3, 4, 5]);
    }
}
