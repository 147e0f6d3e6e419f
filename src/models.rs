use crate::mood::MoodGrade;
use crate::stats::{MonthPoint, Summary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything logged for one calendar day. Absent fields mean "not logged".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub mood: Option<u8>,
    pub note: Option<String>,
    pub anxiety: Option<u8>,
}

impl DayRecord {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            note: None,
            anxiety: None,
        }
    }

    pub fn grade(&self) -> Option<MoodGrade> {
        self.mood.and_then(MoodGrade::from_value)
    }
}

/// A single-field edit for one day, as sent by the page:
/// `{"field": "mood", "value": 4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum DayUpdate {
    Mood(i64),
    Note(String),
    Anxiety(i64),
}

impl DayUpdate {
    pub fn field(&self) -> &'static str {
        match self {
            DayUpdate::Mood(_) => "mood",
            DayUpdate::Note(_) => "note",
            DayUpdate::Anxiety(_) => "anxiety",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthResponse {
    pub month: u32,
    pub points: Vec<MonthPoint>,
    pub summary: Summary,
}
