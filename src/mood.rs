use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Letter grade a user gives a day, from F (worst) to A+ (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoodGrade {
    F,
    D,
    C,
    B,
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl MoodGrade {
    pub const ALL: [MoodGrade; 6] = [
        MoodGrade::F,
        MoodGrade::D,
        MoodGrade::C,
        MoodGrade::B,
        MoodGrade::A,
        MoodGrade::APlus,
    ];

    pub const MAX_VALUE: u8 = 5;

    pub fn value(self) -> u8 {
        match self {
            MoodGrade::F => 0,
            MoodGrade::D => 1,
            MoodGrade::C => 2,
            MoodGrade::B => 3,
            MoodGrade::A => 4,
            MoodGrade::APlus => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodGrade::F => "F",
            MoodGrade::D => "D",
            MoodGrade::C => "C",
            MoodGrade::B => "B",
            MoodGrade::A => "A",
            MoodGrade::APlus => "A+",
        }
    }

    /// Display colour, dark red for F through dark green for A+.
    pub fn color(self) -> &'static str {
        match self {
            MoodGrade::F => "#8b0000",
            MoodGrade::D => "#ff4500",
            MoodGrade::C => "#ffa500",
            MoodGrade::B => "#9acd32",
            MoodGrade::A => "#32cd32",
            MoodGrade::APlus => "#006400",
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}

impl fmt::Display for MoodGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood grade '{0}'")]
pub struct UnknownGrade(pub String);

impl FromStr for MoodGrade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|grade| grade.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownGrade(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeInfo {
    pub label: &'static str,
    pub value: u8,
    pub color: &'static str,
}

pub fn scale() -> Vec<GradeInfo> {
    MoodGrade::ALL
        .into_iter()
        .map(|grade| GradeInfo {
            label: grade.label(),
            value: grade.value(),
            color: grade.color(),
        })
        .collect()
}
