//! Shared state for the HTTP handlers.

use std::sync::Arc;

use crate::location::ZipCodeTable;
use crate::services::ForecastApi;

/// Loaded once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub zip_codes: Arc<ZipCodeTable>,
    pub forecasts: Arc<dyn ForecastApi>,
}

impl AppState {
    pub fn new(zip_codes: ZipCodeTable, forecasts: Arc<dyn ForecastApi>) -> Self {
        Self {
            zip_codes: Arc::new(zip_codes),
            forecasts,
        }
    }
}
