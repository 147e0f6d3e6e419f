use crate::errors::TrackerError;
use crate::layout::month_grid_position;
use crate::models::DayRecord;
use crate::mood::MoodGrade;
use crate::store::Store;
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Moods at or above this value (A, A+) count as good days.
pub const GOOD_DAY_MIN: u8 = 4;
/// Moods at or below this value (D, F) count as bad days.
pub const BAD_DAY_MAX: u8 = 1;

/// Lower bounds of the year classification bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub very_good: f64,
    pub average: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            very_good: 4.0,
            average: 2.5,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, average_mood: Option<f64>) -> Classification {
        match average_mood {
            None => Classification::NoData,
            Some(avg) if avg >= self.very_good => Classification::VeryGood,
            Some(avg) if avg >= self.average => Classification::Average,
            Some(_) => Classification::Tough,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    VeryGood,
    Average,
    Tough,
    NoData,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::VeryGood => "Very good year",
            Classification::Average => "Average year",
            Classification::Tough => "Tough year",
            Classification::NoData => "No data",
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub logged_days: usize,
    pub average_mood: Option<f64>,
    pub average_anxiety: Option<f64>,
    pub good_days: usize,
    pub bad_days: usize,
    pub distribution: BTreeMap<u8, usize>,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthPoint {
    pub date: NaiveDate,
    pub day: u32,
    pub mood: u8,
}

/// Days whose mood was logged, in date order.
pub fn valid_days(store: &Store) -> impl Iterator<Item = &DayRecord> {
    store.records().filter(|record| record.mood.is_some())
}

pub fn year_summary(store: &Store, thresholds: &Thresholds) -> Summary {
    summarize(store.records(), thresholds)
}

/// Same statistics as [`year_summary`], restricted to one month.
pub fn month_statistics(
    store: &Store,
    month: u32,
    thresholds: &Thresholds,
) -> Result<Summary, TrackerError> {
    check_month(month)?;
    Ok(summarize(
        store.records().filter(|record| record.date.month() == month),
        thresholds,
    ))
}

/// Logged moods of one month keyed by day of month. An empty result means
/// nothing was logged that month.
pub fn month_summary(store: &Store, month: u32) -> Result<Vec<MonthPoint>, TrackerError> {
    check_month(month)?;
    Ok(store
        .records()
        .filter(|record| record.date.month() == month)
        .filter_map(|record| {
            record.mood.map(|mood| MonthPoint {
                date: record.date,
                day: month_grid_position(record.date),
                mood,
            })
        })
        .collect())
}

fn summarize<'a>(
    records: impl Iterator<Item = &'a DayRecord>,
    thresholds: &Thresholds,
) -> Summary {
    let mut distribution: BTreeMap<u8, usize> =
        MoodGrade::ALL.iter().map(|grade| (grade.value(), 0)).collect();
    let mut mood_sum = 0u64;
    let mut logged_days = 0usize;
    let mut anxiety_sum = 0u64;
    let mut anxiety_days = 0usize;
    let mut good_days = 0usize;
    let mut bad_days = 0usize;

    for record in records {
        if let Some(mood) = record.mood {
            logged_days += 1;
            mood_sum += u64::from(mood);
            *distribution.entry(mood).or_default() += 1;
            if mood >= GOOD_DAY_MIN {
                good_days += 1;
            }
            if mood <= BAD_DAY_MAX {
                bad_days += 1;
            }
        }
        if let Some(anxiety) = record.anxiety {
            anxiety_days += 1;
            anxiety_sum += u64::from(anxiety);
        }
    }

    let average_mood = mean(mood_sum, logged_days);
    Summary {
        logged_days,
        average_mood,
        average_anxiety: mean(anxiety_sum, anxiety_days),
        good_days,
        bad_days,
        distribution,
        classification: thresholds.classify(average_mood),
    }
}

fn mean(sum: u64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(sum as f64 / count as f64)
}

fn check_month(month: u32) -> Result<(), TrackerError> {
    if !(1..=12).contains(&month) {
        return Err(TrackerError::Range {
            field: "month",
            value: i64::from(month),
            min: 1,
            max: 12,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_moods(entries: &[((u32, u32), i64)]) -> Store {
        let mut store = Store::initialize(2026).unwrap();
        for ((month, day), mood) in entries {
            store.set_mood(date(2026, *month, *day), *mood).unwrap();
        }
        store
    }

    #[test]
    fn empty_store_has_no_data() {
        let store = Store::initialize(2026).unwrap();
        let summary = year_summary(&store, &Thresholds::default());

        assert_eq!(summary.logged_days, 0);
        assert_eq!(summary.average_mood, None);
        assert_eq!(summary.average_anxiety, None);
        assert_eq!(summary.classification, Classification::NoData);
        assert_eq!(summary.distribution.len(), 6);
        assert!(summary.distribution.values().all(|count| *count == 0));
    }

    #[test]
    fn five_logged_days_make_an_average_year() {
        let store = store_with_moods(&[
            ((1, 1), 5),
            ((1, 2), 5),
            ((2, 10), 4),
            ((7, 4), 1),
            ((12, 31), 0),
        ]);
        let summary = year_summary(&store, &Thresholds::default());

        assert_eq!(summary.logged_days, 5);
        assert_eq!(summary.average_mood, Some(3.0));
        assert_eq!(summary.good_days, 3);
        assert_eq!(summary.bad_days, 2);
        let expected: BTreeMap<u8, usize> =
            [(0, 1), (1, 1), (2, 0), (3, 0), (4, 1), (5, 2)].into_iter().collect();
        assert_eq!(summary.distribution, expected);
        assert_eq!(summary.classification, Classification::Average);
        assert_eq!(summary.classification.label(), "Average year");
    }

    #[test]
    fn classification_bands_are_inclusive_at_lower_bound() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.classify(Some(4.0)), Classification::VeryGood);
        assert_eq!(thresholds.classify(Some(5.0)), Classification::VeryGood);
        assert_eq!(thresholds.classify(Some(3.999)), Classification::Average);
        assert_eq!(thresholds.classify(Some(2.5)), Classification::Average);
        assert_eq!(thresholds.classify(Some(2.499_999)), Classification::Tough);
        assert_eq!(thresholds.classify(Some(0.0)), Classification::Tough);
        assert_eq!(thresholds.classify(None), Classification::NoData);
    }

    #[test]
    fn thresholds_are_configurable() {
        let strict = Thresholds {
            very_good: 4.5,
            average: 3.0,
        };
        assert_eq!(strict.classify(Some(4.0)), Classification::Average);
        assert_eq!(strict.classify(Some(2.9)), Classification::Tough);
    }

    #[test]
    fn exact_band_edges_from_logged_data() {
        let very_good = store_with_moods(&[((3, 1), 4), ((3, 2), 4)]);
        assert_eq!(
            year_summary(&very_good, &Thresholds::default()).classification,
            Classification::VeryGood
        );

        let average = store_with_moods(&[((3, 1), 2), ((3, 2), 3)]);
        assert_eq!(
            year_summary(&average, &Thresholds::default()).classification,
            Classification::Average
        );
    }

    #[test]
    fn anxiety_average_ignores_mood_presence() {
        let mut store = Store::initialize(2026).unwrap();
        store.set_anxiety(date(2026, 5, 1), 2).unwrap();
        store.set_anxiety(date(2026, 5, 2), 5).unwrap();
        store.set_mood(date(2026, 5, 3), 3).unwrap();

        let summary = year_summary(&store, &Thresholds::default());
        assert_eq!(summary.average_anxiety, Some(3.5));
        assert_eq!(summary.logged_days, 1);
        assert_eq!(summary.average_mood, Some(3.0));
    }

    #[test]
    fn month_summary_lists_logged_days_in_order() {
        let store = store_with_moods(&[((2, 14), 5), ((2, 1), 2), ((3, 1), 0)]);

        let points = month_summary(&store, 2).unwrap();
        assert_eq!(
            points,
            vec![
                MonthPoint {
                    date: date(2026, 2, 1),
                    day: 1,
                    mood: 2
                },
                MonthPoint {
                    date: date(2026, 2, 14),
                    day: 14,
                    mood: 5
                },
            ]
        );
        assert!(month_summary(&store, 4).unwrap().is_empty());
    }

    #[test]
    fn month_outside_calendar_is_rejected() {
        let store = Store::initialize(2026).unwrap();
        for month in [0, 13] {
            let err = month_summary(&store, month).unwrap_err();
            assert!(matches!(err, TrackerError::Range { field: "month", .. }));
            assert!(month_statistics(&store, month, &Thresholds::default()).is_err());
        }
    }

    #[test]
    fn month_statistics_only_count_that_month() {
        let store = store_with_moods(&[((6, 1), 5), ((6, 2), 4), ((7, 1), 0)]);
        let june = month_statistics(&store, 6, &Thresholds::default()).unwrap();
        assert_eq!(june.logged_days, 2);
        assert_eq!(june.average_mood, Some(4.5));
        assert_eq!(june.bad_days, 0);
        assert_eq!(june.classification, Classification::VeryGood);
    }

    #[test]
    fn valid_days_preserves_date_order() {
        let store = store_with_moods(&[((9, 9), 3), ((1, 9), 1)]);
        let dates: Vec<_> = valid_days(&store).map(|record| record.date).collect();
        assert_eq!(dates, vec![date(2026, 1, 9), date(2026, 9, 9)]);
    }

    #[test]
    fn summary_serializes_labels_and_full_histogram() {
        let store = store_with_moods(&[((1, 1), 3)]);
        let value = serde_json::to_value(year_summary(&store, &Thresholds::default())).unwrap();
        assert_eq!(value["classification"], "Average year");
        assert_eq!(value["distribution"]["3"], 1);
        assert_eq!(value["distribution"]["0"], 0);
    }
}
