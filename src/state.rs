// src/state.rs

use chrono::{DateTime, Utc};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Utc::now(),
        }
    }
}
