// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::handler::ChatHandler;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub handler: Arc<dyn ChatHandler>,
}

impl AppState {
    pub fn new(config: Config, handler: Arc<dyn ChatHandler>) -> Self {
        Self { config, handler }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
