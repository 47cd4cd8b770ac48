//! Trait for anything that can produce a forecast for a coordinate.

use anyhow::Result;

use crate::location::Coordinate;
use crate::summary::Forecast;

/// Abstraction over a forecast provider (e.g. the NWS API).
///
/// The HTTP server holds one behind an `Arc<dyn ForecastApi>`, which is also
/// how tests swap in canned forecasts.
#[async_trait::async_trait]
pub trait ForecastApi: Send + Sync {
    /// Returns the forecast periods for `coordinate`.
    async fn fetch_forecast(&self, coordinate: &Coordinate) -> Result<Forecast>;
}
