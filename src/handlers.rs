use crate::editor::apply_update;
use crate::errors::AppError;
use crate::layout::{year_calendar, CalendarCell};
use crate::models::{DayRecord, DayUpdate, MonthResponse};
use crate::mood::{scale, GradeInfo};
use crate::state::AppState;
use crate::stats::{month_statistics, month_summary, year_summary, Summary};
use crate::storage::{encode_store, export_filename};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(store.year()))
}

pub async fn get_scale() -> Json<Vec<GradeInfo>> {
    Json(scale())
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayRecord>, AppError> {
    let date = parse_date(&date)?;
    let store = state.store.lock().await;
    let record = store
        .get(date)
        .map_err(|err| AppError::action("load day", err))?;
    Ok(Json(record.clone()))
}

pub async fn update_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(update): Json<DayUpdate>,
) -> Result<Json<DayRecord>, AppError> {
    let date = parse_date(&date)?;
    let action = format!("save {}", update.field());
    let record = apply_update(&state, date, update)
        .await
        .map_err(|err| AppError::action(&action, err))?;
    Ok(Json(record))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<Summary> {
    let store = state.store.lock().await;
    Json(year_summary(&store, &state.thresholds))
}

pub async fn get_month(
    State(state): State<AppState>,
    Path(month): Path<u32>,
) -> Result<Json<MonthResponse>, AppError> {
    let store = state.store.lock().await;
    let points = month_summary(&store, month).map_err(|err| AppError::action("load month", err))?;
    let summary = month_statistics(&store, month, &state.thresholds)
        .map_err(|err| AppError::action("load month", err))?;
    Ok(Json(MonthResponse {
        month,
        points,
        summary,
    }))
}

pub async fn get_calendar(State(state): State<AppState>) -> Json<Vec<CalendarCell>> {
    let store = state.store.lock().await;
    Json(year_calendar(&store))
}

pub async fn export(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.lock().await;
    let disposition = format!("attachment; filename=\"{}\"", export_filename(store.year()));
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        encode_store(&store),
    )
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("'{raw}' is not a YYYY-MM-DD date")))
}
