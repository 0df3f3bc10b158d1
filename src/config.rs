//! Configuration management for the `TravelHub` dashboard
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelHubError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for the `TravelHub` dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelHubConfig {
    /// Upstream data API
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// HTTP server
    #[serde(default)]
    pub server: ServerConfig,
    /// Tab polling
    #[serde(default)]
    pub polling: PollingConfig,
    /// Map figure layout
    #[serde(default)]
    pub map: MapConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream data API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL the domain endpoints hang off
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; unset leaves the transport defaults in place
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory with a prebuilt front-end, served for non-API paths
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Refresh interval per tab in seconds
    #[serde(default = "default_polling_interval")]
    pub interval_seconds: u64,
}

/// Map figure layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map tile style
    #[serde(default = "default_map_style")]
    pub style: String,
    #[serde(default = "default_map_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_map_center_lon")]
    pub center_lon: f64,
    #[serde(default = "default_map_zoom")]
    pub zoom: f64,
    /// Paper and plot background colour
    #[serde(default = "default_map_background")]
    pub background: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_upstream_base_url() -> String {
    "https://api.example.com".to_string()
}

fn default_user_agent() -> String {
    format!("TravelHub/{}", crate::VERSION)
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8050
}

fn default_polling_interval() -> u64 {
    60
}

fn default_map_style() -> String {
    "carto-positron".to_string()
}

fn default_map_center_lat() -> f64 {
    35.682_839
}

fn default_map_center_lon() -> f64 {
    139.759_455
}

fn default_map_zoom() -> f64 {
    12.0
}

fn default_map_background() -> String {
    "#f0f2f5".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            static_dir: None,
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_polling_interval(),
        }
    }
}

impl PollingConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: default_map_style(),
            center_lat: default_map_center_lat(),
            center_lon: default_map_center_lon(),
            zoom: default_map_zoom(),
            background: default_map_background(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TravelHubConfig {
    /// Load configuration from the given path, or the default location,
    /// overlaid with environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVELHUB__SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("TRAVELHUB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelHubConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelhub").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.upstream.base_url.is_empty() {
            self.upstream.base_url = default_upstream_base_url();
        }
        if self.upstream.user_agent.is_empty() {
            self.upstream.user_agent = default_user_agent();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.polling.interval_seconds == 0 {
            self.polling.interval_seconds = default_polling_interval();
        }
        if self.map.style.is_empty() {
            self.map.style = default_map_style();
        }
        if self.map.background.is_empty() {
            self.map.background = default_map_background();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if let Some(timeout) = self.upstream.timeout_seconds {
            if timeout == 0 || timeout > 300 {
                return Err(TravelHubError::config(
                    "Upstream timeout must be between 1 and 300 seconds",
                )
                .into());
            }
        }

        if self.polling.interval_seconds > 3600 {
            return Err(TravelHubError::config("Polling interval cannot exceed 3600 seconds").into());
        }

        if !(0.0..=22.0).contains(&self.map.zoom) {
            return Err(TravelHubError::config("Map zoom must be between 0 and 22").into());
        }

        if !(-90.0..=90.0).contains(&self.map.center_lat)
            || !(-180.0..=180.0).contains(&self.map.center_lon)
        {
            return Err(TravelHubError::config("Map center is not a valid coordinate").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelHubError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelHubError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            return Err(TravelHubError::config(
                "Upstream base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}
