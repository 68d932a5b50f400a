//! # Aggregate Statistics Reducer
//!
//! Each resource kind supplies an [`Accumulator`] that folds records one at a time and
//! then produces its stats report. [`reduce`] drives it in a single pass over the store.
//!
//! The pieces here ([`Tally`], [`Extent`], [`average`]) are shared by the concrete
//! accumulators. All of them are well defined on empty input: zero counts, `0.0`
//! averages, empty tallies and no extremes.

use serde::Serialize;
use std::collections::BTreeMap;

/// Folds records into a summary.
pub trait Accumulator<T>: Default {
    type Output;

    fn observe(&mut self, record: &T);

    fn finish(self) -> Self::Output;
}

/// Runs `A` over `records` in one pass.
pub fn reduce<'a, T, A>(records: impl IntoIterator<Item = &'a T>) -> A::Output
where
    T: 'a,
    A: Accumulator<T>,
{
    let mut acc = A::default();
    for record in records {
        acc.observe(record);
    }
    acc.finish()
}

/// Rounds to two decimal places, exact halves going to the even neighbour.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `sum / count` rounded to two places; `0.0` when there is nothing to average.
pub fn average(sum: f64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round2(sum / count as f64)
}

/// Occurrence count per distinct value of a categorical field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<String, u64>);

impl Tally {
    pub fn record(&mut self, key: &str) {
        *self.0.entry(key.to_owned()).or_insert(0) += 1;
    }

    pub fn get(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, u64); N]> for Tally {
    fn from(entries: [(&str, u64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(key, count)| (key.to_owned(), count))
                .collect(),
        )
    }
}

/// Running minimum and maximum of a numeric field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    min: Option<f64>,
    max: Option<f64>,
}

impl Extent {
    pub fn observe(&mut self, value: f64) {
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }
}
