//! Runtime settings, read from the environment (and `.env` via dotenvy in
//! `main`). Command-line flags override these.

use std::path::PathBuf;

use crate::infra::nws::DEFAULT_BASE_URL;

pub const DEFAULT_ZIP_CSV: &str = "zip.csv";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `ZIP_CSV_PATH`
    pub zip_csv_path: PathBuf,
    /// `NWS_API_BASE`
    pub api_base: String,
    /// `NWS_USER_AGENT`
    pub user_agent: String,
    /// `BIND_ADDR`
    pub bind_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zip_csv_path: PathBuf::from(DEFAULT_ZIP_CSV),
            api_base: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; unset or blank keys
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            zip_csv_path: get("ZIP_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.zip_csv_path),
            api_base: get("NWS_API_BASE").unwrap_or(defaults.api_base),
            user_agent: get("NWS_USER_AGENT").unwrap_or(defaults.user_agent),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base, "https://api.weather.gov");
        assert!(settings.user_agent.starts_with("nws_forecast/"));
    }

    #[test]
    fn test_values_from_lookup() {
        let env: HashMap<&str, &str> = [
            ("ZIP_CSV_PATH", "/data/zip.csv"),
            ("NWS_API_BASE", "http://localhost:9000"),
            ("NWS_USER_AGENT", "(example.com, ops@example.com)"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]
        .into_iter()
        .collect();

        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.zip_csv_path, PathBuf::from("/data/zip.csv"));
        assert_eq!(settings.api_base, "http://localhost:9000");
        assert_eq!(settings.user_agent, "(example.com, ops@example.com)");
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_blank_value_falls_back() {
        let settings = Settings::from_lookup(|k| (k == "BIND_ADDR").then(|| "  ".to_string()));
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR);
    }
}
