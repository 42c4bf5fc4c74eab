//! Interactive state shared by the timeline and the detail cluster.

use std::collections::HashSet;

use super::dataset::AnimeRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub selected_year: i32,
    pub hovered: Option<AnimeRecord>,
}

impl SelectionState {
    pub fn new(selected_year: i32) -> Self {
        Self {
            selected_year,
            hovered: None,
        }
    }

    /// Returns `true` when the year actually changed. Switching years also
    /// drops the hovered record, whose bubble no longer exists.
    pub fn select_year(&mut self, year: i32) -> bool {
        if self.selected_year == year {
            return false;
        }
        self.selected_year = year;
        self.hovered = None;
        true
    }

    pub fn hover(&mut self, record: AnimeRecord) {
        self.hovered = Some(record);
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn is_hovered(&self, id: u64) -> bool {
        self.hovered.as_ref().is_some_and(|r| r.id == id)
    }
}

/// Records released in `year`, unique by id. The first occurrence wins, so a
/// title listed once per season shows up as a single bubble.
pub fn detail_records(records: &[AnimeRecord], year: i32) -> Vec<AnimeRecord> {
    dedup_by_id(records.iter().filter(|r| r.release_year == Some(year)))
}

pub fn dedup_by_id<'a>(records: impl IntoIterator<Item = &'a AnimeRecord>) -> Vec<AnimeRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, year: i32, season: &str) -> AnimeRecord {
        AnimeRecord {
            id,
            title: Some(format!("title {id}")),
            release_year: Some(year),
            release_season: Some(season.to_string()),
            popularity: Some(id * 100),
            score: None,
        }
    }

    #[test]
    fn filters_year_and_keeps_first_duplicate() {
        let records = vec![
            record(1, 2006, "spring"),
            record(2, 2006, "fall"),
            record(1, 2006, "summer"),
            record(3, 2007, "winter"),
        ];
        let detail = detail_records(&records, 2006);
        assert_eq!(detail.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(detail[0].release_season.as_deref(), Some("spring"));
    }

    #[test]
    fn dedup_is_idempotent() {
        let records = vec![
            record(4, 2000, "fall"),
            record(4, 2000, "winter"),
            record(5, 2000, "fall"),
        ];
        let once = dedup_by_id(&records);
        let twice = dedup_by_id(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn reselecting_the_same_year_is_a_no_op() {
        let mut state = SelectionState::new(2020);
        state.hover(record(9, 2020, "fall"));
        assert!(!state.select_year(2020));
        assert!(state.is_hovered(9));

        assert!(state.select_year(1999));
        assert_eq!(state.selected_year, 1999);
        assert!(state.hovered.is_none());
    }

    #[test]
    fn hover_round_trip() {
        let mut state = SelectionState::new(2020);
        assert!(!state.is_hovered(1));
        state.hover(record(1, 2020, "spring"));
        assert!(state.is_hovered(1));
        assert!(!state.is_hovered(2));
        state.clear_hover();
        assert!(state.hovered.is_none());
    }

    #[test]
    fn unknown_year_is_empty() {
        let records = vec![record(1, 2006, "spring")];
        assert!(detail_records(&records, 1800).is_empty());
    }
}
