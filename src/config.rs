use crate::errors::TrackerError;
use crate::stats::Thresholds;
use chrono::{Datelike, Local};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATA_PATH: &str = "data/moods.csv";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    pub year: i32,
    pub thresholds: Thresholds,
}

impl Config {
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset keys fall back to
    /// defaults; set but unparseable keys are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TrackerError> {
        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let year = parse_var(&lookup, "MOOD_YEAR")?.unwrap_or_else(|| Local::now().year());

        let defaults = Thresholds::default();
        let thresholds = Thresholds {
            very_good: parse_var(&lookup, "MOOD_VERY_GOOD_THRESHOLD")?
                .unwrap_or(defaults.very_good),
            average: parse_var(&lookup, "MOOD_AVERAGE_THRESHOLD")?.unwrap_or(defaults.average),
        };
        validate_thresholds(&thresholds)?;

        Ok(Self {
            data_path,
            port,
            year,
            thresholds,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, TrackerError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| TrackerError::config(format!("{key}={raw:?} is not a valid value"))),
    }
}

fn validate_thresholds(thresholds: &Thresholds) -> Result<(), TrackerError> {
    let Thresholds { very_good, average } = *thresholds;
    if !very_good.is_finite() || !average.is_finite() {
        return Err(TrackerError::config("classification thresholds must be finite"));
    }
    if average > very_good {
        return Err(TrackerError::config(format!(
            "average threshold {average} is above very good threshold {very_good}"
        )));
    }
    Ok(())
}
