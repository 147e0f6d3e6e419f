use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/scale", get(handlers::get_scale))
        .route(
            "/api/days/:date",
            get(handlers::get_day).post(handlers::update_day),
        )
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/months/:month", get(handlers::get_month))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/export", get(handlers::export))
        .with_state(state)
}
