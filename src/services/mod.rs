pub mod forecast_api;

pub use forecast_api::ForecastApi;
