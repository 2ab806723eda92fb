//! Environment-driven configuration for the research desk.

use std::str::FromStr;

use log::LevelFilter;
use research_engine::{GatewaySettings, DEFAULT_BACKEND_URL};
use url::Url;

use crate::platform::logging::LogDestination;

pub const BACKEND_URL_ENV: &str = "RESEARCH_BACKEND_URL";
pub const LOG_DESTINATION_ENV: &str = "RESEARCH_LOG";
pub const LOG_LEVEL_ENV: &str = "RESEARCH_LOG_LEVEL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("RESEARCH_BACKEND_URL={value:?} is not a valid URL")]
    InvalidBackendUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("RESEARCH_BACKEND_URL={value:?} must use http or https")]
    UnsupportedScheme { value: String },
    #[error("RESEARCH_LOG={value:?} must be one of: file, terminal, both")]
    InvalidLogDestination { value: String },
    #[error("RESEARCH_LOG_LEVEL={value:?} is not a log level")]
    InvalidLogLevel { value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: Url,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset and blank values take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = get(BACKEND_URL_ENV).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let backend_url = Url::parse(raw_url.trim()).map_err(|source| {
            ConfigError::InvalidBackendUrl {
                value: raw_url.clone(),
                source,
            }
        })?;
        if !matches!(backend_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme { value: raw_url });
        }

        let log_destination = match get(LOG_DESTINATION_ENV) {
            Some(value) => LogDestination::from_str(&value)
                .map_err(|_| ConfigError::InvalidLogDestination { value })?,
            None => LogDestination::File,
        };

        let log_level = match get(LOG_LEVEL_ENV) {
            Some(value) => LevelFilter::from_str(value.trim())
                .map_err(|_| ConfigError::InvalidLogLevel { value })?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            backend_url,
            log_destination,
            log_level,
        })
    }

    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.backend_url.to_string(),
            ..GatewaySettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.log_destination, LogDestination::File);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn blank_backend_url_falls_back_to_default() {
        let config = config_from(&[(BACKEND_URL_ENV, "  ")]).unwrap();
        assert_eq!(config.backend_url.host_str(), Some("localhost"));
    }

    #[test]
    fn reads_all_overrides() {
        let config = config_from(&[
            (BACKEND_URL_ENV, "https://agents.example.org/base"),
            (LOG_DESTINATION_ENV, "both"),
            (LOG_LEVEL_ENV, "debug"),
        ])
        .unwrap();
        assert_eq!(config.backend_url.as_str(), "https://agents.example.org/base");
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(
            config.gateway_settings().base_url,
            "https://agents.example.org/base"
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[(BACKEND_URL_ENV, "localhost:8000/x y")]),
            Err(ConfigError::UnsupportedScheme { .. }) | Err(ConfigError::InvalidBackendUrl { .. })
        ));
        assert!(matches!(
            config_from(&[(BACKEND_URL_ENV, "ftp://files.example")]),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            config_from(&[(LOG_DESTINATION_ENV, "syslog")]),
            Err(ConfigError::InvalidLogDestination { .. })
        ));
        assert!(matches!(
            config_from(&[(LOG_LEVEL_ENV, "loud")]),
            Err(ConfigError::InvalidLogLevel { .. })
        ));
    }
}
