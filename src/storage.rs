use crate::date_key::DateKey;
use crate::errors::AppError;
use crate::models::Snapshot;
use crate::tracker::Tracker;
use serde_json::Value;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from("data/habits.json"),
    }
}

pub async fn load_data(path: &Path) -> Tracker {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => Tracker::from_snapshot(parse_snapshot(&value)),
            Err(err) => {
                error!("failed to parse data file: {err}");
                Tracker::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Tracker::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Tracker::default()
        }
    }
}

pub async fn persist_data(path: &Path, tracker: &Tracker) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(&tracker.snapshot()).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Reads whatever usable data a stored document holds. Missing or
/// wrongly-typed fields come back empty instead of failing the load.
pub fn parse_snapshot(value: &Value) -> Snapshot {
    let mut snapshot = Snapshot::default();

    match value.get("habits") {
        Some(Value::Array(items)) => snapshot.habits = string_items(items, "habits"),
        Some(other) if !other.is_null() => warn!("ignoring non-array habits field"),
        _ => {}
    }

    match value.get("completions") {
        Some(Value::Object(days)) => {
            for (raw_date, habits) in days {
                let Some(date) = DateKey::parse(raw_date) else {
                    warn!("ignoring completions under invalid date {raw_date:?}");
                    continue;
                };
                let Value::Array(items) = habits else {
                    warn!("ignoring non-array completions for {raw_date}");
                    continue;
                };
                snapshot.completions.insert(date, string_items(items, raw_date));
            }
        }
        Some(other) if !other.is_null() => warn!("ignoring non-object completions field"),
        _ => {}
    }

    snapshot
}

fn string_items(items: &[Value], field: &str) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(name.clone()),
            other => {
                warn!("ignoring non-string entry {other} in {field}");
                None
            }
        })
        .collect()
}
