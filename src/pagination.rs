//! This module defines the common functionality for paging the transaction
//! history.

use std::ops::Range;

/// The config for pagination.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when none is selected.
    pub default_page: u64,
    /// The number of transactions to display per page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 5,
        }
    }
}

/// One element of the pagination controls under the transaction list.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(u64),
    /// The page currently displayed.
    CurrPage(u64),
    /// A link to the previous page. Omitted on the first page so that views
    /// disable backwards navigation at the lower bound.
    BackButton(u64),
    /// A link to the next page. Omitted on the last page.
    NextButton(u64),
}

/// How many pages are needed for `item_count` items.
pub(crate) fn page_count(item_count: usize, page_size: u64) -> u64 {
    (item_count as u64).div_ceil(page_size.max(1))
}

/// The index range of the 1-indexed `page` within a list of `item_count`
/// items.
///
/// Page 0 and pages past the end yield an empty range rather than an error.
pub(crate) fn page_bounds(page: u64, page_size: u64, item_count: usize) -> Range<usize> {
    if page < 1 {
        return item_count..item_count;
    }

    let start = ((page - 1) * page_size) as usize;

    if start >= item_count {
        return item_count..item_count;
    }

    start..(start + page_size as usize).min(item_count)
}

/// Build the page controls for `curr_page` of `page_count` pages: a back
/// button when there is a previous page, every page number with the current
/// one marked, and a next button when there is a following page.
pub(crate) fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
) -> Vec<PaginationIndicator> {
    let mut indicators: Vec<PaginationIndicator> = (1..=page_count)
        .map(|page| {
            if page == curr_page {
                PaginationIndicator::CurrPage(page)
            } else {
                PaginationIndicator::Page(page)
            }
        })
        .collect();

    if curr_page > 1 {
        indicators.insert(0, PaginationIndicator::BackButton(curr_page - 1));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}

#[cfg(test)]
mod tests {
    use crate::pagination::{
        PaginationIndicator, create_pagination_indicators, page_bounds, page_count,
    };

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(12, 5), 3);
    }

    #[test]
    fn page_bounds_slices_full_and_partial_pages() {
        assert_eq!(page_bounds(1, 5, 12), 0..5);
        assert_eq!(page_bounds(3, 5, 12), 10..12);
    }

    #[test]
    fn page_bounds_is_empty_past_the_end() {
        let got = page_bounds(4, 5, 12);

        assert!(got.is_empty());
    }

    #[test]
    fn page_bounds_is_empty_below_the_first_page() {
        let got = page_bounds(0, 5, 12);

        assert!(got.is_empty());
    }

    #[test]
    fn first_page_has_no_back_button() {
        let want = [
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::NextButton(2),
        ];

        let got = create_pagination_indicators(1, 3);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn last_page_has_no_next_button() {
        let want = [
            PaginationIndicator::BackButton(2),
            PaginationIndicator::Page(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::CurrPage(3),
        ];

        let got = create_pagination_indicators(3, 3);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn middle_page_has_both_buttons() {
        let want = [
            PaginationIndicator::BackButton(1),
            PaginationIndicator::Page(1),
            PaginationIndicator::CurrPage(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::NextButton(3),
        ];

        let got = create_pagination_indicators(2, 3);

        assert_eq!(want, got.as_slice());
    }
}
