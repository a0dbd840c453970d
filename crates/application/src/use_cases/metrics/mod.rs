pub mod export_metrics;

pub use export_metrics::ExportMetricsUseCase;
