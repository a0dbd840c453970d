use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address receiving length-prefixed protobuf streams from resolvers
    #[serde(default = "default_ingest_address")]
    pub ingest_address: String,

    #[serde(default = "default_web_address")]
    pub web_address: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ingest_address: default_ingest_address(),
            web_address: default_web_address(),
            metrics_path: default_metrics_path(),
        }
    }
}

fn default_ingest_address() -> String {
    "0.0.0.0:4242".to_string()
}

fn default_web_address() -> String {
    "0.0.0.0:9142".to_string()
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}
