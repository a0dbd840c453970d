pub mod errors;
pub mod ingest;
pub mod logging;
pub mod metrics;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use ingest::IngestConfig;
pub use logging::LoggingConfig;
pub use metrics::MetricsConfig;
pub use root::{CliOverrides, Config, API_PREFIX};
pub use server::ServerConfig;
