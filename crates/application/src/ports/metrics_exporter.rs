use rpz_exporter_domain::DomainError;

/// Renders every registered metric in the Prometheus text exposition format.
pub trait MetricsExporter: Send + Sync {
    fn encode_text(&self) -> Result<String, DomainError>;
}
