//! # Pagination Slicer
//!
//! `skip`/`limit` bounds applied to an already-filtered sequence. Slicing is clipped to
//! the input: a `skip` past the end yields nothing, and a `limit` running past the end
//! yields a short page. Neither is an error.

use std::iter::{Skip, Take};

/// Limit used when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 10;

/// Largest page a caller may request.
pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("limit must be between 1 and {MAX_LIMIT}, got {0}")]
    LimitOutOfRange(usize),
}

/// Validated pagination bounds: `skip >= 0`, `1 <= limit <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: usize,
    limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    pub fn new(skip: usize, limit: usize) -> Result<Self, PageError> {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(PageError::LimitOutOfRange(limit));
        }
        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Lazily bounds any iterator to `[skip, skip + limit)`.
    pub fn slice<I: Iterator>(self, iter: I) -> Take<Skip<I>> {
        iter.skip(self.skip).take(self.limit)
    }

    /// Slices a materialized sequence.
    pub fn apply<T: Clone>(&self, records: &[T]) -> Vec<T> {
        self.slice(records.iter()).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_bounds() {
        assert!(Page::new(0, 1).is_ok());
        assert!(Page::new(0, MAX_LIMIT).is_ok());
        assert_eq!(Page::new(0, 0), Err(PageError::LimitOutOfRange(0)));
        assert_eq!(Page::new(3, 101), Err(PageError::LimitOutOfRange(101)));
    }

    #[test]
    fn test_slices_window() {
        let xs: Vec<u32> = (1..=10).collect();
        assert_eq!(Page::new(2, 3).unwrap().apply(&xs), vec![3, 4, 5]);
    }

    #[test]
    fn test_clips_to_input() {
        let xs = vec![1, 2, 3];
        assert_eq!(Page::new(1, 10).unwrap().apply(&xs), vec![2, 3]);
        assert!(Page::new(5, 10).unwrap().apply(&xs).is_empty());
        assert!(Page::default().apply::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_reslicing_same_bounds_is_idempotent() {
        let xs: Vec<u32> = (0..25).collect();
        for n in [1, 7, 25, 100] {
            let page = Page::new(0, n).unwrap();
            let once = page.apply(&xs);
            assert_eq!(page.apply(&once), once);
        }
    }
}
