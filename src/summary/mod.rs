//! Forecast aggregation.
//!
//! Turns the half-day periods of an NWS gridpoint forecast into one
//! low/high/description record per weekday.

pub mod aggregate;
pub mod types;

pub use aggregate::summarize;
pub use types::{DaySummary, Forecast, ForecastSummary, WeatherPeriod, weekday_name};
