use crate::store::Store;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Cell of the full-year grid: ISO week column, weekday row (0 = Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearGridPosition {
    pub week: u32,
    pub weekday: u32,
}

pub fn year_grid_position(date: NaiveDate) -> YearGridPosition {
    YearGridPosition {
        week: date.iso_week().week(),
        weekday: date.weekday().num_days_from_monday(),
    }
}

pub fn month_grid_position(date: NaiveDate) -> u32 {
    date.day()
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub week: u32,
    pub weekday: u32,
    pub mood: Option<u8>,
    pub color: Option<&'static str>,
}

/// Every day of the tracked year placed on the week x weekday grid.
///
/// Early January and late December days keep their ISO week, so they can land
/// in week 52/53 or week 1 respectively.
pub fn year_calendar(store: &Store) -> Vec<CalendarCell> {
    store
        .records()
        .map(|record| {
            let position = year_grid_position(record.date);
            CalendarCell {
                date: record.date,
                week: position.week,
                weekday: position.weekday,
                mood: record.mood,
                color: record.grade().map(|grade| grade.color()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_year_2026_is_thursday_of_week_one() {
        assert_eq!(
            year_grid_position(date(2026, 1, 1)),
            YearGridPosition { week: 1, weekday: 3 }
        );
        assert_eq!(
            year_grid_position(date(2026, 1, 4)),
            YearGridPosition { week: 1, weekday: 6 }
        );
        assert_eq!(
            year_grid_position(date(2026, 1, 5)),
            YearGridPosition { week: 2, weekday: 0 }
        );
    }

    #[test]
    fn boundary_days_keep_iso_week() {
        // 2027-01-01 is a Friday in ISO week 53 of 2026.
        assert_eq!(year_grid_position(date(2027, 1, 1)).week, 53);
        // 2024-12-30 is the Monday of ISO week 1 of 2025.
        assert_eq!(
            year_grid_position(date(2024, 12, 30)),
            YearGridPosition { week: 1, weekday: 0 }
        );
    }

    #[test]
    fn month_position_is_day_of_month() {
        assert_eq!(month_grid_position(date(2026, 2, 14)), 14);
        assert_eq!(month_grid_position(date(2026, 1, 31)), 31);
        assert_eq!(month_grid_position(date(2024, 2, 29)), 29);
    }

    #[test]
    fn calendar_covers_year_and_colours_logged_days() {
        let mut store = Store::initialize(2026).unwrap();
        store.set_mood(date(2026, 3, 2), 5).unwrap();

        let cells = year_calendar(&store);
        assert_eq!(cells.len(), 365);

        let logged: Vec<_> = cells.iter().filter(|cell| cell.color.is_some()).collect();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].date, date(2026, 3, 2));
        assert_eq!(logged[0].color, Some("#006400"));
        assert_eq!(logged[0].weekday, 0);
    }
}
