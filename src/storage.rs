use crate::errors::{SchemaIssue, TrackerError};
use crate::models::DayRecord;
use crate::store::{check_range, Store, ANXIETY_RANGE, MOOD_RANGE};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

pub const COLUMNS: [&str; 4] = ["date", "mood", "note", "anxiety"];

/// Result of parsing a backing file: the store plus every row that was
/// rejected and left absent.
#[derive(Debug)]
pub struct Decoded {
    pub store: Store,
    pub skipped: Vec<SchemaIssue>,
}

/// Loads the store for `year`, creating and persisting an empty one when the
/// file is missing or blank.
pub async fn load_store(path: &Path, year: i32) -> Result<Store, TrackerError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(TrackerError::persistence(path, err)),
    };

    if content.trim().is_empty() {
        info!("no data at {}, starting a fresh {year} store", path.display());
        let store = Store::initialize(year)?;
        persist_store(path, &store).await?;
        return Ok(store);
    }

    let Decoded { store, skipped } = decode_store(&content, year)?;
    for issue in &skipped {
        warn!("skipped record in {}: {issue}", path.display());
    }
    info!(
        "loaded {} days from {} ({} skipped)",
        store.len(),
        path.display(),
        skipped.len()
    );
    Ok(store)
}

/// Writes the whole store next to `path` and renames it into place.
pub async fn persist_store(path: &Path, store: &Store) -> Result<(), TrackerError> {
    let payload = encode_store(store);
    let tmp_path = path.with_extension(format!("tmp.{}", std::process::id()));
    if let Err(err) = write_synced(&tmp_path, payload.as_bytes()).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(TrackerError::persistence(&tmp_path, err));
    }
    if let Err(err) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(TrackerError::persistence(path, err));
    }
    Ok(())
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

pub fn export_filename(year: i32) -> String {
    format!("moods-{year}.csv")
}

pub fn encode_store(store: &Store) -> String {
    let mut out = String::with_capacity(store.len() * 24);
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for record in store.records() {
        let row = [
            record.date.format("%Y-%m-%d").to_string(),
            record.mood.map(|v| v.to_string()).unwrap_or_default(),
            csv_escape(record.note.as_deref().unwrap_or_default()),
            record.anxiety.map(|v| v.to_string()).unwrap_or_default(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub fn decode_store(content: &str, year: i32) -> Result<Decoded, TrackerError> {
    let mut store = Store::initialize(year)?;
    let mut rows = parse_rows(content).into_iter();

    let Some((header_line, header)) = rows.next() else {
        return Err(SchemaIssue::new(1, "missing header").into());
    };
    let columns = Columns::from_header(header_line, &header)?;

    let mut skipped = Vec::new();
    let mut seen = HashSet::new();
    let mut restored = 0usize;
    let mut foreign_year = None;
    for (line, cells) in rows {
        if cells.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match columns.record(line, &cells) {
            Err(issue) => skipped.push(issue),
            Ok(record) if record.date.year() != year => {
                foreign_year.get_or_insert(record.date.year());
                skipped.push(SchemaIssue::new(
                    line,
                    format!("{} is outside the tracked year {year}", record.date),
                ));
            }
            Ok(record) if !seen.insert(record.date) => {
                skipped.push(SchemaIssue::new(
                    line,
                    format!("duplicate date {}", record.date),
                ));
            }
            Ok(record) => {
                store.restore(record)?;
                restored += 1;
            }
        }
    }

    // A file holding only another year's days must not be replaced by an
    // empty store on the next save.
    if let (0, Some(other)) = (restored, foreign_year) {
        return Err(SchemaIssue::new(
            header_line,
            format!("file holds {other} data, not the tracked year {year}"),
        )
        .into());
    }

    Ok(Decoded { store, skipped })
}

/// Positions of the known columns in the header. Only `date` is mandatory;
/// older files without `note`/`anxiety` load with those fields absent.
struct Columns {
    width: usize,
    date: usize,
    mood: Option<usize>,
    note: Option<usize>,
    anxiety: Option<usize>,
}

impl Columns {
    fn from_header(line: usize, header: &[String]) -> Result<Self, SchemaIssue> {
        let find = |name: &str| {
            header
                .iter()
                .position(|cell| cell.trim().trim_start_matches('\u{feff}') == name)
        };
        let date = find("date").ok_or_else(|| SchemaIssue::new(line, "header has no date column"))?;
        Ok(Self {
            width: header.len(),
            date,
            mood: find("mood"),
            note: find("note"),
            anxiety: find("anxiety"),
        })
    }

    fn record(&self, line: usize, cells: &[String]) -> Result<DayRecord, SchemaIssue> {
        if cells.len() != self.width {
            return Err(SchemaIssue::new(
                line,
                format!("expected {} cells, found {}", self.width, cells.len()),
            ));
        }

        let raw_date = cells[self.date].trim();
        let date = parse_date(raw_date)
            .ok_or_else(|| SchemaIssue::new(line, format!("unparseable date '{raw_date}'")))?;

        let level = |field: &'static str,
                     index: Option<usize>,
                     range: (i64, i64)|
         -> Result<Option<u8>, SchemaIssue> {
            parse_level(cell(cells, index))
                .map_err(|reason| SchemaIssue::new(line, format!("{date} {field}: {reason}")))?
                .map(|value| check_range(field, value, range))
                .transpose()
                .map_err(|err| SchemaIssue::new(line, format!("{date}: {err}")))
        };

        let note = cell(cells, self.note);
        Ok(DayRecord {
            date,
            mood: level("mood", self.mood, MOOD_RANGE)?,
            note: (!note.trim().is_empty()).then(|| note.to_string()),
            anxiety: level("anxiety", self.anxiety, ANXIETY_RANGE)?,
        })
    }
}

fn cell(cells: &[String], index: Option<usize>) -> &str {
    index.map(|i| cells[i].as_str()).unwrap_or_default()
}

/// Accepts plain ISO dates and the `YYYY-MM-DD 00:00:00` form spreadsheet
/// exports produce.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.split(['T', ' ']).next().unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Empty means absent. Integral floats such as `4.0` are accepted.
fn parse_level(raw: &str) -> Result<Option<i64>, String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(Some(value));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(Some(value as i64)),
        _ => Err(format!("'{raw}' is not a whole number")),
    }
}

fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Splits CSV text into rows of cells, honouring quoted fields that contain
/// separators, doubled quotes or line breaks. Each row carries the 1-based
/// line it starts on.
fn parse_rows(content: &str) -> Vec<(usize, Vec<String>)> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    cell.push(ch);
                }
                _ => cell.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut cell)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                rows.push((row_line, std::mem::take(&mut row)));
                line += 1;
                row_line = line;
            }
            _ => cell.push(ch),
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push((row_line, row));
    }
    rows
}
