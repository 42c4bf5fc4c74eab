//! Per-year release counts for the timeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dataset::AnimeRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearAggregate {
    pub year: i32,
    pub title_count: usize,
}

/// Count records per release year, dropping years before `min_year` and
/// records without a year. Output is ordered by year.
pub fn aggregate_by_year(records: &[AnimeRecord], min_year: i32) -> Vec<YearAggregate> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in records.iter().filter_map(|r| r.release_year) {
        if year >= min_year {
            *counts.entry(year).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(year, title_count)| YearAggregate { year, title_count })
        .collect()
}
