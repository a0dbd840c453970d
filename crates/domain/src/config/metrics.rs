use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_subsystem")]
    pub subsystem: String,
}

impl MetricsConfig {
    /// Fully qualified metric name, `<namespace>_<subsystem>_<name>`.
    /// Empty components are skipped.
    pub fn metric_name(&self, name: &str) -> String {
        [self.namespace.as_str(), self.subsystem.as_str(), name]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            subsystem: default_subsystem(),
        }
    }
}

fn default_namespace() -> String {
    "pdns_protobuf".to_string()
}

fn default_subsystem() -> String {
    "rpz".to_string()
}
