use super::ingest::IngestMetrics;
use super::policy_counter::PrometheusPolicyCounter;
use prometheus::{Encoder, Registry, TextEncoder};
use rpz_exporter_application::ports::MetricsExporter;
use rpz_exporter_domain::config::MetricsConfig;
use rpz_exporter_domain::DomainError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to register metric: {0}")]
    RegistrationFailed(#[from] prometheus::Error),

    #[error("failed to encode metrics: {0}")]
    EncodingFailed(String),
}

pub type MetricsResult<T> = Result<T, MetricsError>;

impl From<MetricsError> for DomainError {
    fn from(err: MetricsError) -> Self {
        DomainError::Metrics(err.to_string())
    }
}

/// Owns the Prometheus registry and every series the exporter publishes.
pub struct MetricsRegistry {
    registry: Registry,
    policy_counter: Arc<PrometheusPolicyCounter>,
    ingest: IngestMetrics,
}

impl MetricsRegistry {
    pub fn new(config: &MetricsConfig) -> MetricsResult<Self> {
        let registry = Registry::new();
        let policy_counter = Arc::new(PrometheusPolicyCounter::new(&registry, config)?);
        let ingest = IngestMetrics::new(&registry, config)?;

        Ok(Self {
            registry,
            policy_counter,
            ingest,
        })
    }

    pub fn policy_counter(&self) -> Arc<PrometheusPolicyCounter> {
        Arc::clone(&self.policy_counter)
    }

    pub fn ingest_metrics(&self) -> IngestMetrics {
        self.ingest.clone()
    }

    /// Prometheus text exposition of every registered series.
    pub fn render(&self) -> MetricsResult<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| MetricsError::EncodingFailed(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| MetricsError::EncodingFailed(e.to_string()))
    }
}

impl MetricsExporter for MetricsRegistry {
    fn encode_text(&self) -> Result<String, DomainError> {
        Ok(self.render()?)
    }
}
