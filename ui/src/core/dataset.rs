//! Static anime dataset bundled into the binary at build time.
//!
//! The JSON is parsed once into a process-wide [`Dataset`]. Broken input never
//! aborts the app: a document that cannot be parsed yields an empty dataset,
//! individual records that cannot be decoded are skipped, and both cases are
//! logged.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{aggregate_by_year, YearAggregate};
use super::config::ChartConfig;

const EMBEDDED_DATA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/anime.json"
));

static SHARED: Lazy<Dataset> = Lazy::new(|| Dataset::load(EMBEDDED_DATA));

/// One scraped title. Only the id is required; anything else may be missing
/// and is shown as a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimeRecord {
    #[serde(rename = "mal_id")]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "air_year", default)]
    pub release_year: Option<i32>,
    #[serde(rename = "air_season", default)]
    pub release_season: Option<String>,
    #[serde(rename = "members", default)]
    pub popularity: Option<u64>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset root must be an array of records")]
    NotAnArray,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Per-year counts at or after the configured minimum year, ascending.
    pub aggregates: Vec<YearAggregate>,
    /// Every decoded record, unfiltered.
    pub all: Vec<AnimeRecord>,
}

impl Dataset {
    /// The dataset compiled into the crate.
    pub fn shared() -> &'static Dataset {
        &SHARED
    }

    /// Parse and aggregate, falling back to an empty dataset on failure.
    pub fn load(raw: &str) -> Self {
        match Self::try_load(raw) {
            Ok(dataset) => {
                tracing::info!(
                    records = dataset.all.len(),
                    years = dataset.aggregates.len(),
                    "dataset loaded"
                );
                dataset
            }
            Err(err) => {
                tracing::warn!("couldn't load dataset: {err}");
                Self::default()
            }
        }
    }

    pub fn try_load(raw: &str) -> Result<Self, DatasetError> {
        let all = parse_records(raw)?;
        Ok(Self::from_records(all, ChartConfig::default().min_year))
    }

    pub fn from_records(all: Vec<AnimeRecord>, min_year: i32) -> Self {
        let aggregates = aggregate_by_year(&all, min_year);
        Self { aggregates, all }
    }

    /// Both halves must be present before anything is drawn.
    pub fn is_ready(&self) -> bool {
        !self.aggregates.is_empty() && !self.all.is_empty()
    }

    /// Number of entries released in `year`, duplicates included. This matches
    /// the timeline count, so detail bubbles share their year's colour.
    pub fn year_count(&self, year: i32) -> usize {
        self.all
            .iter()
            .filter(|record| record.release_year == Some(year))
            .count()
    }

    /// Smallest and largest popularity across the whole collection.
    pub fn popularity_extent(&self) -> Option<(f64, f64)> {
        extent(self.all.iter().filter_map(|r| r.popularity.map(|p| p as f64)))
    }

    /// Smallest and largest per-year count on the timeline.
    pub fn count_extent(&self) -> Option<(f64, f64)> {
        extent(self.aggregates.iter().map(|a| a.title_count as f64))
    }
}

fn parse_records(raw: &str) -> Result<Vec<AnimeRecord>, DatasetError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let serde_json::Value::Array(items) = value else {
        return Err(DatasetError::NotAnArray);
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<AnimeRecord>(item) {
            Ok(record) => records.push(record),
            Err(err) => tracing::warn!(index, "skipping malformed record: {err}"),
        }
    }
    Ok(records)
}

pub(crate) fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_wire_field_names() {
        let raw = json!([
            {"mal_id": 5114, "title": "Fullmetal Alchemist: Brotherhood", "air_year": 2009,
             "air_season": "spring", "members": 3100000, "score": 9.1}
        ])
        .to_string();
        let dataset = Dataset::try_load(&raw).unwrap();
        let record = &dataset.all[0];
        assert_eq!(record.id, 5114);
        assert_eq!(record.release_year, Some(2009));
        assert_eq!(record.release_season.as_deref(), Some("spring"));
        assert_eq!(record.popularity, Some(3_100_000));
    }

    #[test]
    fn missing_optional_fields_are_tolerated() {
        let raw = json!([{"mal_id": 1, "air_year": 1999}]).to_string();
        let dataset = Dataset::try_load(&raw).unwrap();
        assert_eq!(dataset.all.len(), 1);
        assert!(dataset.all[0].title.is_none());
        assert!(dataset.is_ready());
    }

    #[test]
    fn malformed_records_are_skipped() {
        let raw = json!([
            {"mal_id": 1, "air_year": 1999},
            {"title": "no id"},
            {"mal_id": "not a number", "air_year": 2001},
            {"mal_id": 2, "air_year": 1999}
        ])
        .to_string();
        let dataset = Dataset::load(&raw);
        assert_eq!(dataset.all.len(), 2);
        assert_eq!(dataset.year_count(1999), 2);
    }

    #[test]
    fn broken_document_yields_empty_dataset() {
        let dataset = Dataset::load("{ not json");
        assert!(dataset.all.is_empty());
        assert!(dataset.aggregates.is_empty());
        assert!(!dataset.is_ready());

        assert!(matches!(
            Dataset::try_load("{\"mal_id\": 1}"),
            Err(DatasetError::NotAnArray)
        ));
    }

    #[test]
    fn embedded_dataset_is_ready() {
        let dataset = Dataset::shared();
        assert!(dataset.is_ready());
        assert!(dataset
            .aggregates
            .iter()
            .all(|a| a.year >= ChartConfig::default().min_year));
    }

    #[test]
    fn extents_cover_all_values() {
        let raw = json!([
            {"mal_id": 1, "air_year": 1999, "members": 40},
            {"mal_id": 2, "air_year": 1999, "members": 10},
            {"mal_id": 3, "air_year": 2001},
        ])
        .to_string();
        let dataset = Dataset::load(&raw);
        assert_eq!(dataset.popularity_extent(), Some((10.0, 40.0)));
        assert_eq!(dataset.count_extent(), Some((1.0, 2.0)));
        assert_eq!(Dataset::default().popularity_extent(), None);
    }
}
