//! JSON decoding for the two api.weather.gov responses we consume.

use anyhow::{Context, Result, anyhow};
use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::summary::{Forecast, WeatherPeriod};

#[derive(Deserialize)]
struct Points {
    properties: PointsProperties,
}

#[derive(Deserialize)]
struct PointsProperties {
    forecast: Option<String>,
}

#[derive(Deserialize)]
struct GridForecast {
    properties: GridForecastProperties,
}

#[derive(Deserialize)]
struct GridForecastProperties {
    #[serde(default)]
    periods: Vec<Value>,
}

/// Extracts the gridpoint forecast URL from a `/points/{lat},{long}` response.
///
/// # Errors
///
/// Returns an error if the body is not JSON of the expected shape or has no
/// `properties.forecast` link (e.g. points outside NWS coverage).
pub fn parse_points(bytes: &[u8]) -> Result<String> {
    let points: Points =
        serde_json::from_slice(bytes).context("Failed to parse points response")?;

    points
        .properties
        .forecast
        .filter(|url| !url.is_empty())
        .ok_or_else(|| anyhow!("Points response has no forecast URL"))
}

/// Decodes a gridpoint forecast response into a [`Forecast`].
///
/// Periods without a parseable `startTime` or a numeric temperature are
/// dropped with a warning so the aggregator only ever sees complete periods.
pub fn parse_forecast(bytes: &[u8]) -> Result<Forecast> {
    let forecast: GridForecast =
        serde_json::from_slice(bytes).context("Failed to parse forecast response")?;

    let total = forecast.properties.periods.len();

    let periods: Vec<WeatherPeriod> = forecast
        .properties
        .periods
        .into_iter()
        .filter_map(|item| {
            let period = parse_period(&item);
            if period.is_none() {
                warn!(
                    number = item["number"].as_u64(),
                    start_time = item["startTime"].as_str(),
                    "Dropping malformed forecast period"
                );
            }
            period
        })
        .collect();

    if periods.len() < total {
        warn!(kept = periods.len(), total, "Some forecast periods were dropped");
    }

    Ok(Forecast { periods })
}

fn parse_period(item: &Value) -> Option<WeatherPeriod> {
    let start_time = DateTime::parse_from_rfc3339(item["startTime"].as_str()?).ok()?;

    // Newer API responses may wrap the value as {"unitCode": ..., "value": n}.
    let temperature = item["temperature"]
        .as_f64()
        .or_else(|| item["temperature"]["value"].as_f64())?;

    Some(WeatherPeriod {
        number: item["number"].as_u64().unwrap_or(0) as u32,
        name: item["name"].as_str().unwrap_or("").to_string(),
        start_time,
        temperature,
        short_forecast: item["shortForecast"].as_str().unwrap_or("").to_string(),
    })
}
