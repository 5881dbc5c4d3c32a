pub mod config;
pub mod errors;
pub mod models;
pub mod services;

use std::sync::Arc;

pub use errors::CatalogError;
pub use services::catalog::{CatalogService, CatalogSnapshot};

// Shared state для всего приложения
pub struct AppState {
    pub catalog: CatalogService,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let catalog = CatalogService::new(config.catalog.allocation_seed);
        Arc::new(Self { catalog, config })
    }
}
