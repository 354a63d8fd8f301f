use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits).post(handlers::add_habit))
        .route("/api/habits/delete", post(handlers::delete_habit))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/days/:date", get(handlers::get_day))
        .with_state(state)
}
