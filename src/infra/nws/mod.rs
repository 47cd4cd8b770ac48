//! api.weather.gov client.

mod client;

pub use client::{DEFAULT_BASE_URL, NwsClient};
