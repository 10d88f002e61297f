//! Configuration management for the Inventaris dashboard

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// REST backend location. The `/api/v1` base path is fixed and appended by the client.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Page sizes of the windowed lists shown on the overview tab
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub categories_per_page: usize,
    pub opds_per_page: usize,
    pub distributions_per_page: usize,
    /// Page size used when walking the paginated endpoints for report export
    pub export_page_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // INVENTARIS__API__BASE_URL, INVENTARIS__DASHBOARD__OPDS_PER_PAGE, ...
            .add_source(
                Environment::with_prefix("INVENTARIS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", env::var("API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            categories_per_page: 3,
            opds_per_page: 3,
            distributions_per_page: 4,
            export_page_size: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.dashboard.categories_per_page, 3);
        assert_eq!(config.dashboard.distributions_per_page, 4);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("logging.level", "debug")
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.dashboard.opds_per_page, 3);
    }

    #[test]
    fn test_base_url_override_alone_is_enough() {
        let config: AppConfig = Config::builder()
            .set_override_option("api.base_url", Some("http://inventaris.local:9000"))
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.base_url, "http://inventaris.local:9000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_single_field_in_section() {
        let config: AppConfig = Config::builder()
            .set_override("api.timeout_secs", 5)
            .unwrap()
            .set_override("dashboard.export_page_size", 25)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.dashboard.export_page_size, 25);
        assert_eq!(config.dashboard.categories_per_page, 3);
    }
}
