//! # Predicate Filter Pipeline
//!
//! A list request is a [`Query`]: one filter value plus optional pagination bounds.
//! Each resource kind describes its filter as a plain struct of `Option` fields and
//! implements [`Predicate`] for it by AND-ing the helpers below. A `None` field never
//! constrains anything; it is not the same thing as "match `false`" or "match empty".
//!
//! Filtering always runs before pagination, so `skip`/`limit` count over the matching
//! set rather than over the whole store.

use crate::page::Page;

/// A pure test over a single record.
pub trait Predicate<T: ?Sized> {
    fn matches(&self, record: &T) -> bool;
}

/// The empty filter: every record matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unconstrained;

impl<T: ?Sized> Predicate<T> for Unconstrained {
    fn matches(&self, _record: &T) -> bool {
        true
    }
}

/// Case-insensitive exact string equality.
///
/// An absent or empty expectation imposes no constraint.
pub fn text_matches(expected: Option<&str>, actual: &str) -> bool {
    match expected {
        Some(expected) if !expected.is_empty() => expected.to_lowercase() == actual.to_lowercase(),
        _ => true,
    }
}

/// Exact boolean equality. `None` is unconstrained.
pub fn flag_matches(expected: Option<bool>, actual: bool) -> bool {
    expected.map_or(true, |expected| expected == actual)
}

/// Inclusive numeric range where either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds<N> {
    pub min: Option<N>,
    pub max: Option<N>,
}

impl<N: PartialOrd + Copy> Bounds<N> {
    pub fn new(min: Option<N>, max: Option<N>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: N) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// A filter plus optional pagination bounds, evaluated in a single pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query<F> {
    pub filter: F,
    pub page: Option<Page>,
}

impl<F> Query<F> {
    /// A query over `filter` with no pagination.
    pub fn new(filter: F) -> Self {
        Self { filter, page: None }
    }

    pub fn paged(filter: F, page: Page) -> Self {
        Self {
            filter,
            page: Some(page),
        }
    }

    /// Filters `records` and then slices the matching sequence.
    pub fn run<'a, T>(&self, records: impl IntoIterator<Item = &'a T>) -> Vec<T>
    where
        T: Clone + 'a,
        F: Predicate<T>,
    {
        let matching = records
            .into_iter()
            .filter(|record| self.filter.matches(record));
        match self.page {
            Some(page) => page.slice(matching).cloned().collect(),
            None => matching.cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        label: &'static str,
        weight: u32,
        active: bool,
    }

    #[derive(Debug, Default)]
    struct ItemFilter {
        label: Option<String>,
        weight: Bounds<u32>,
        active: Option<bool>,
    }

    impl Predicate<Item> for ItemFilter {
        fn matches(&self, item: &Item) -> bool {
            text_matches(self.label.as_deref(), item.label)
                && self.weight.contains(item.weight)
                && flag_matches(self.active, item.active)
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { label: "Alpha", weight: 10, active: true },
            Item { label: "beta", weight: 20, active: false },
            Item { label: "ALPHA", weight: 30, active: false },
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let items = items();
        assert_eq!(Query::new(ItemFilter::default()).run(&items), items);
        assert_eq!(Query::new(Unconstrained).run(&items), items);
    }

    #[test]
    fn test_text_is_case_insensitive_and_exact() {
        let items = items();
        let by_label = ItemFilter {
            label: Some("alpha".into()),
            ..Default::default()
        };
        let hits = Query::new(by_label).run(&items);
        assert_eq!(hits.len(), 2);

        let prefix = ItemFilter {
            label: Some("alp".into()),
            ..Default::default()
        };
        assert!(Query::new(prefix).run(&items).is_empty());
    }

    #[test]
    fn test_empty_text_is_unconstrained() {
        assert!(text_matches(Some(""), "anything"));
        assert!(text_matches(None, "anything"));
    }

    #[test]
    fn test_bounds_are_inclusive_and_independent() {
        let both = Bounds::new(Some(10), Some(20));
        assert!(both.contains(10));
        assert!(both.contains(20));
        assert!(!both.contains(21));

        let lower = Bounds::new(Some(15), None);
        assert!(!lower.contains(10));
        assert!(lower.contains(u32::MAX));

        let upper: Bounds<f64> = Bounds::new(None, Some(9.99));
        assert!(upper.contains(0.0));
        assert!(!upper.contains(10.0));
    }

    #[test]
    fn test_flag_none_is_not_false() {
        let items = items();
        let inactive = ItemFilter {
            active: Some(false),
            ..Default::default()
        };
        assert_eq!(Query::new(inactive).run(&items).len(), 2);
        assert_eq!(Query::new(ItemFilter::default()).run(&items).len(), 3);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let items = items();
        let combined = ItemFilter {
            label: Some("alpha".into()),
            weight: Bounds::new(Some(25), None),
            active: Some(false),
        };
        let hits = Query::new(combined).run(&items);
        assert_eq!(hits, vec![items[2].clone()]);
    }

    #[test]
    fn test_query_paginates_after_filtering() {
        let items = items();
        let query = Query::paged(
            ItemFilter {
                active: Some(false),
                ..Default::default()
            },
            Page::new(1, 10).unwrap(),
        );
        assert_eq!(query.run(&items), vec![items[2].clone()]);
    }

    #[test]
    fn test_query_past_the_end_is_empty() {
        let items = items();
        let query = Query::paged(Unconstrained, Page::new(5, 10).unwrap());
        assert!(query.run(&items).is_empty());
    }
}
