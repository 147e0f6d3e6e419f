use axum::http::StatusCode;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// A single malformed row (or header) in the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct SchemaIssue {
    pub line: usize,
    pub reason: String,
}

impl SchemaIssue {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{date} is outside the tracked year {year}")]
    NotFound { date: NaiveDate, year: i32 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    Range {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("could not access {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data, {0}")]
    Schema(#[from] SchemaIssue),
}

impl TrackerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Wraps a domain error, prefixing the message with the action that failed.
    pub fn action(action: &str, err: TrackerError) -> Self {
        let status = match &err {
            TrackerError::Range { .. } => StatusCode::BAD_REQUEST,
            TrackerError::NotFound { .. } => StatusCode::NOT_FOUND,
            TrackerError::Config(_)
            | TrackerError::Persistence { .. }
            | TrackerError::Schema(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: format!("{action} failed: {err}"),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_maps_domain_errors_to_status() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let not_found = AppError::action("load day", TrackerError::NotFound { date, year: 2026 });
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(
            not_found.message,
            "load day failed: 2025-03-01 is outside the tracked year 2026"
        );

        let range = AppError::action(
            "save mood",
            TrackerError::Range {
                field: "mood",
                value: 9,
                min: 0,
                max: 5,
            },
        );
        assert_eq!(range.status, StatusCode::BAD_REQUEST);
        assert!(range.message.contains("mood must be between 0 and 5, got 9"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let persist = AppError::action("save mood", TrackerError::persistence("data/moods.csv", io));
        assert_eq!(persist.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(persist.message.contains("data/moods.csv"));
    }
}
