use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use super::error::AppError;
use super::state::AppState;
use crate::summary::ForecastSummary;

pub async fn health_check() -> &'static str {
    "ok"
}

/// `GET /forecast/{zipcode}`: per-weekday summary for the ZIP code, sorted by day.
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(zipcode): Path<String>,
) -> Result<Json<ForecastSummary>, AppError> {
    let coordinate = state
        .zip_codes
        .lookup(&zipcode)
        .ok_or_else(|| AppError::NotFound(format!("Could not find zipcode {zipcode}")))?;

    let forecast = state
        .forecasts
        .fetch_forecast(coordinate)
        .await
        .map_err(|e| {
            error!(zipcode = %zipcode, error = %e, "Could not get forecast");
            AppError::Upstream(format!("{e:#}"))
        })?;

    let mut summary = forecast.summary();
    summary.sort_by_day();

    info!(zipcode = %zipcode, days = summary.len(), "Forecast served");
    Ok(Json(summary))
}
