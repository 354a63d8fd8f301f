use crate::storage::resolve_data_path;
use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
}

impl Config {
    /// Reads `PORT` and `APP_DATA_PATH`. Unset or unparseable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            data_path: resolve_data_path(),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
