pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::DataSource;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub data_source: Arc<dyn DataSource>,
}

impl AppState {
    pub fn new(config: Config, data_source: Arc<dyn DataSource>) -> Self {
        Self {
            config: Arc::new(config),
            data_source,
        }
    }
}
