pub mod app;
pub mod calendar;
pub mod completion_log;
pub mod config;
pub mod date_key;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod state;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
pub use tracker::Tracker;
