use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::ingest::IngestConfig;
use super::logging::LoggingConfig;
use super::metrics::MetricsConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "rpz-exporter.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rpz-exporter/config.toml";

/// Prefix the JSON API is nested under on the web listener.
pub const API_PREFIX: &str = "/api";

/// Main configuration structure for the RPZ policy exporter
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening endpoints (protobuf ingest, metrics web server)
    #[serde(default)]
    pub server: ServerConfig,

    /// Ingest pipeline tuning
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Exposed metric naming
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rpz-exporter.toml in current directory
    /// 3. /etc/rpz-exporter/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(addr) = overrides.ingest_address {
            self.server.ingest_address = addr;
        }
        if let Some(addr) = overrides.web_address {
            self.server.web_address = addr;
        }
        if let Some(path) = overrides.metrics_path {
            self.server.metrics_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.disable_policy_hits {
            self.logging.policy_hits = false;
        }
    }

    pub fn ingest_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_address("server.ingest_address", &self.server.ingest_address)
    }

    pub fn web_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_address("server.web_address", &self.server.web_address)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ingest_socket_addr()?;
        self.web_socket_addr()?;

        if !self.server.metrics_path.starts_with('/') || self.server.metrics_path.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "Metrics path must be an absolute path, got '{}'",
                self.server.metrics_path
            )));
        }

        if is_under_api_prefix(&self.server.metrics_path) {
            return Err(ConfigError::Validation(format!(
                "Metrics path '{}' collides with the {} routes",
                self.server.metrics_path, API_PREFIX
            )));
        }

        if self.ingest.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Ingest queue capacity cannot be 0".to_string(),
            ));
        }

        if self.ingest.max_connections == Some(0) {
            return Err(ConfigError::Validation(
                "Ingest max_connections cannot be 0 (omit it for no limit)".to_string(),
            ));
        }

        let name = self.metrics.metric_name("applied_policy_total");
        if !is_valid_metric_name(&name) {
            return Err(ConfigError::Validation(format!(
                "Invalid metric name '{}': check metrics.namespace and metrics.subsystem",
                name
            )));
        }

        Ok(())
    }
}

/// Accepts `host:port` as well as the `:port` shorthand, which binds all
/// IPv4 interfaces.
fn parse_listen_address(field: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    let candidate = if value.starts_with(':') {
        format!("0.0.0.0{}", value)
    } else {
        value.to_string()
    };

    candidate.parse().map_err(|_| {
        ConfigError::Validation(format!("Invalid listen address for {}: '{}'", field, value))
    })
}

fn is_under_api_prefix(path: &str) -> bool {
    let path = path.trim_end_matches('/');
    path == API_PREFIX
        || path
            .strip_prefix(API_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub ingest_address: Option<String>,
    pub web_address: Option<String>,
    pub metrics_path: Option<String>,
    pub log_level: Option<String>,
    pub disable_policy_hits: bool,
}
