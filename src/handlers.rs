use crate::calendar::build_calendar;
use crate::date_key::{DateKey, YearMonth};
use crate::errors::AppError;
use crate::models::{
    CalendarGrid, CalendarQuery, DayDetail, HabitRequest, HabitView, StatsResponse,
    ToggleRequest, ToggleResponse,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(DateKey::today(), YearMonth::current()))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<HabitView>> {
    let tracker = state.tracker.lock().await;
    Json(tracker.habit_views(DateKey::today()))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<HabitRequest>,
) -> Result<Json<Vec<HabitView>>, AppError> {
    let (name, views) = state
        .commit(|tracker| {
            let name = tracker.add_habit(&payload.name)?.to_string();
            Ok((name, tracker.habit_views(DateKey::today())))
        })
        .await?;
    info!(habit = %name, "habit added");

    Ok(Json(views))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Json(payload): Json<HabitRequest>,
) -> Result<Json<Vec<HabitView>>, AppError> {
    let (removed, views) = state
        .commit(|tracker| {
            let removed = tracker.delete_habit(&payload.name);
            Ok((removed, tracker.habit_views(DateKey::today())))
        })
        .await?;
    info!(habit = %payload.name, removed, "habit deleted");

    Ok(Json(views))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let date = match payload.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => DateKey::today(),
    };

    let completed = state
        .commit(|tracker| {
            tracker.toggle_completion(date, &payload.habit).ok_or_else(|| {
                AppError::not_found(format!("unknown habit {:?}", payload.habit))
            })
        })
        .await?;
    info!(habit = %payload.habit, %date, completed, "completion toggled");

    Ok(Json(ToggleResponse {
        date,
        habit: payload.habit,
        completed,
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let tracker = state.tracker.lock().await;
    Json(build_stats(&tracker))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarGrid>, AppError> {
    let current = YearMonth::current();
    let year = query.year.unwrap_or(current.year());
    let month0 = query.month.unwrap_or(current.month0());
    let month = YearMonth::new(year, month0)
        .ok_or_else(|| AppError::bad_request("month must be 0..=11 and year 0..=9999"))?;

    let tracker = state.tracker.lock().await;
    Ok(Json(build_calendar(&tracker.log, month)))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(raw_date): Path<String>,
) -> Result<Json<DayDetail>, AppError> {
    let date = parse_date(&raw_date)?;
    let tracker = state.tracker.lock().await;
    Ok(Json(tracker.day_detail(date)))
}

fn parse_date(raw: &str) -> Result<DateKey, AppError> {
    DateKey::parse(raw.trim()).ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))
}
