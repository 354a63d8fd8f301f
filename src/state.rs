use crate::errors::AppError;
use crate::storage::persist_data;
use crate::tracker::Tracker;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, tracker: Tracker) -> Self {
        Self {
            data_path,
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Applies `change` to a copy of the tracker, saves the copy, and only
    /// then makes it current. A rejected change or a failed save leaves the
    /// shared tracker untouched.
    pub async fn commit<T>(
        &self,
        change: impl FnOnce(&mut Tracker) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut tracker = self.tracker.lock().await;
        let mut next = tracker.clone();
        let output = change(&mut next)?;
        persist_data(&self.data_path, &next).await?;
        *tracker = next;
        Ok(output)
    }
}
