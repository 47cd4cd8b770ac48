use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::fetch::{BasicClient, DefaultHeaders, HttpClient, fetch_bytes};
use crate::location::Coordinate;
use crate::parser::{parse_forecast, parse_points};
use crate::services::forecast_api::ForecastApi;
use crate::summary::Forecast;

pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";

/// Fetches gridpoint forecasts from api.weather.gov.
///
/// A forecast takes two requests: `/points/{lat},{long}` names the
/// gridpoint forecast URL, which is then fetched as-is.
pub struct NwsClient<C> {
    base_url: String,
    http: C,
}

impl NwsClient<DefaultHeaders<BasicClient>> {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let http = DefaultHeaders::nws(BasicClient::new()?, user_agent)
            .context("Invalid NWS request headers")?;
        Ok(Self::with_client(base_url, http))
    }
}

impl<C: HttpClient> NwsClient<C> {
    pub fn with_client(base_url: &str, http: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn points_url(&self, coordinate: &Coordinate) -> String {
        format!("{}/points/{}", self.base_url, coordinate)
    }

    /// Resolves the gridpoint forecast URL for `coordinate`.
    pub async fn forecast_url(&self, coordinate: &Coordinate) -> Result<String> {
        let bytes = fetch_bytes(&self.http, &self.points_url(coordinate))
            .await
            .with_context(|| format!("Points lookup failed for {coordinate}"))?;
        parse_points(&bytes)
    }
}

#[async_trait]
impl<C: HttpClient> ForecastApi for NwsClient<C> {
    #[tracing::instrument(skip_all, fields(coordinate = %coordinate))]
    async fn fetch_forecast(&self, coordinate: &Coordinate) -> Result<Forecast> {
        let forecast_url = self.forecast_url(coordinate).await?;
        debug!(forecast_url, "Resolved gridpoint forecast URL");

        let bytes = fetch_bytes(&self.http, &forecast_url)
            .await
            .context("Forecast request failed")?;
        let forecast = parse_forecast(&bytes)?;

        info!(periods = forecast.periods.len(), "Forecast fetched");
        Ok(forecast)
    }
}
