use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page size used when parameters are built from defaults.
pub const DEFAULT_PAGE_SIZE: usize = 10;

///
/// PageWindow
///
/// 1-based pagination window. Out-of-range pages clamp to an empty slice;
/// page number zero is treated as page one. Never an error.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageWindow {
    pub number: usize,
    pub size: usize,
}

impl PageWindow {
    #[must_use]
    pub const fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// Clamped half-open index range into `len` rows.
    #[must_use]
    pub const fn range(&self, len: usize) -> Range<usize> {
        let start = self.number.saturating_sub(1).saturating_mul(self.size);
        let end = start.saturating_add(self.size);
        let start = if start > len { len } else { start };
        let end = if end > len { len } else { end };

        start..end
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

///
/// Paged
///
/// One page of rows plus the total cardinality of the sequence the page was
/// cut from (post-filter, pre-paging). Returning the pair keeps the caller
/// in charge of where the total is stored.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Paged<T> {
    pub rows: Vec<T>,
    pub total: usize,
}

/// Slice one page out of a sequence, reporting the pre-slice total.
#[must_use]
pub fn apply_paging<T: Clone>(rows: &[T], window: PageWindow) -> Paged<T> {
    let total = rows.len();
    let rows = rows[window.range(total)].to_vec();

    Paged { rows, total }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{PageWindow, apply_paging};

    fn rows(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn second_page_of_twenty_five() {
        let paged = apply_paging(&rows(25), PageWindow::new(2, 10));
        assert_eq!(paged.rows, (10..20).collect::<Vec<_>>());
        assert_eq!(paged.total, 25);
    }

    #[test]
    fn partial_last_page() {
        let paged = apply_paging(&rows(25), PageWindow::new(3, 10));
        assert_eq!(paged.rows, (20..25).collect::<Vec<_>>());
        assert_eq!(paged.total, 25);
    }

    #[test]
    fn page_beyond_range_is_empty_not_an_error() {
        let paged = apply_paging(&rows(25), PageWindow::new(9, 10));
        assert!(paged.rows.is_empty());
        assert_eq!(paged.total, 25);
    }

    #[test]
    fn page_zero_clamps_to_first_page() {
        let paged = apply_paging(&rows(5), PageWindow::new(0, 2));
        assert_eq!(paged.rows, vec![0, 1]);
    }

    #[test]
    fn empty_input_yields_empty_page_and_zero_total() {
        let paged = apply_paging(&rows(0), PageWindow::new(1, 10));
        assert!(paged.rows.is_empty());
        assert_eq!(paged.total, 0);
    }

    #[test]
    fn identical_windows_are_idempotent() {
        let window = PageWindow::new(2, 10);
        assert_eq!(apply_paging(&rows(25), window), apply_paging(&rows(25), window));
    }
}
