use crate::ports::MetricsExporter;
use rpz_exporter_domain::DomainError;
use std::sync::Arc;

pub struct ExportMetricsUseCase {
    exporter: Arc<dyn MetricsExporter>,
}

impl ExportMetricsUseCase {
    pub fn new(exporter: Arc<dyn MetricsExporter>) -> Self {
        Self { exporter }
    }

    pub fn execute(&self) -> Result<String, DomainError> {
        self.exporter.encode_text()
    }
}
