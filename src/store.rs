use crate::errors::TrackerError;
use crate::models::{DayRecord, DayUpdate};
use chrono::{Datelike, NaiveDate};

pub const MOOD_RANGE: (i64, i64) = (0, 5);
pub const ANXIETY_RANGE: (i64, i64) = (1, 5);

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// One record per calendar day of a single year, in date order.
///
/// Records live at `date.ordinal0()`, so the store cannot hold gaps or
/// duplicates: the only constructor fills every day of the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    year: i32,
    days: Vec<DayRecord>,
}

impl Store {
    pub fn initialize(year: i32) -> Result<Self, TrackerError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TrackerError::config(format!(
                "tracked year {year} must be between {MIN_YEAR} and {MAX_YEAR}"
            )));
        }
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| TrackerError::config(format!("year {year} has no January 1st")))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| TrackerError::config(format!("year {year} has no December 31st")))?;

        let days: Vec<DayRecord> = start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(DayRecord::empty)
            .collect();
        if days.is_empty() {
            return Err(TrackerError::config(format!("year {year} has no days")));
        }

        Ok(Self { year, days })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn start(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn end(&self) -> NaiveDate {
        self.days[self.days.len() - 1].date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year
    }

    pub fn records(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.iter()
    }

    pub fn get(&self, date: NaiveDate) -> Result<&DayRecord, TrackerError> {
        let index = self.index_of(date)?;
        Ok(&self.days[index])
    }

    pub fn set_mood(&mut self, date: NaiveDate, value: i64) -> Result<&DayRecord, TrackerError> {
        let mood = check_range("mood", value, MOOD_RANGE)?;
        let record = self.get_mut(date)?;
        record.mood = Some(mood);
        Ok(record)
    }

    /// Empty or whitespace-only text clears the note.
    pub fn set_note(
        &mut self,
        date: NaiveDate,
        text: impl Into<String>,
    ) -> Result<&DayRecord, TrackerError> {
        let text = text.into();
        let record = self.get_mut(date)?;
        record.note = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        Ok(record)
    }

    pub fn set_anxiety(
        &mut self,
        date: NaiveDate,
        value: i64,
    ) -> Result<&DayRecord, TrackerError> {
        let anxiety = check_range("anxiety", value, ANXIETY_RANGE)?;
        let record = self.get_mut(date)?;
        record.anxiety = Some(anxiety);
        Ok(record)
    }

    pub fn apply(&mut self, date: NaiveDate, update: DayUpdate) -> Result<&DayRecord, TrackerError> {
        match update {
            DayUpdate::Mood(value) => self.set_mood(date, value),
            DayUpdate::Note(text) => self.set_note(date, text),
            DayUpdate::Anxiety(value) => self.set_anxiety(date, value),
        }
    }

    /// Overwrites a whole record while loading from disk. Values are assumed
    /// already validated by the decoder.
    pub(crate) fn restore(&mut self, record: DayRecord) -> Result<(), TrackerError> {
        let slot = self.get_mut(record.date)?;
        *slot = record;
        Ok(())
    }

    fn get_mut(&mut self, date: NaiveDate) -> Result<&mut DayRecord, TrackerError> {
        let index = self.index_of(date)?;
        Ok(&mut self.days[index])
    }

    fn index_of(&self, date: NaiveDate) -> Result<usize, TrackerError> {
        if !self.contains(date) {
            return Err(TrackerError::NotFound {
                date,
                year: self.year,
            });
        }
        Ok(date.ordinal0() as usize)
    }
}

pub(crate) fn check_range(
    field: &'static str,
    value: i64,
    (min, max): (i64, i64),
) -> Result<u8, TrackerError> {
    let out_of_range = || TrackerError::Range {
        field,
        value,
        min,
        max,
    };
    if value < min || value > max {
        return Err(out_of_range());
    }
    u8::try_from(value).map_err(|_| out_of_range())
}
