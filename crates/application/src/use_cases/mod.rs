pub mod metrics;
pub mod policies;

// Re-export use cases
pub use metrics::ExportMetricsUseCase;
pub use policies::{GetPolicyCountsUseCase, PolicyOutcome, RecordAppliedPolicyUseCase};
