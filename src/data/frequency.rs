// src/data/frequency.rs

//! Implements [`FrequencyTable`], the count of timestamps per [`BucketKey`].

use crate::common::Count;
use crate::data::datetime::{Granularity, Instant};

use std::collections::HashMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// An [`Instant`] rendered at some [`Granularity`], e.g.
/// `"2024/01/02 03:04"`.
///
/// All `BucketKey`s of one `Granularity` have the same length and sort
/// chronologically.
pub type BucketKey = String;

pub type MapBucketKeyToCount = HashMap<BucketKey, Count>;

/// Count of occurrences per [`BucketKey`], accumulated over all lines of
/// all input sources.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    counts: MapBucketKeyToCount,
    /// sum of all counts
    total: Count,
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        FrequencyTable::default()
    }

    /// Increment the count of `key` by one.
    pub fn increment(
        &mut self,
        key: BucketKey,
    ) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Increment the count of the [`BucketKey`] of `instant` rendered at
    /// `granularity`.
    pub fn add_instant(
        &mut self,
        instant: &Instant,
        granularity: Granularity,
    ) {
        self.increment(instant.to_bucket_key(granularity));
    }

    /// Count for `key`; `0` if never seen.
    pub fn count(
        &self,
        key: &str,
    ) -> Count {
        self.counts
            .get(key)
            .copied()
            .unwrap_or(0)
    }

    /// Count of distinct [`BucketKey`]s.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> Count {
        self.total
    }

    /// All entries sorted ascending by [`BucketKey`] which is chronological
    /// order.
    pub fn sorted(&self) -> Vec<(&BucketKey, Count)> {
        let mut entries: Vec<(&BucketKey, Count)> = self
            .counts
            .iter()
            .map(|(key, count)| (key, *count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        defñ!("{} entries", entries.len());

        entries
    }
}
