use rpz_exporter_application::use_cases::{ExportMetricsUseCase, GetPolicyCountsUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub export_metrics: Arc<ExportMetricsUseCase>,
    pub get_policy_counts: Arc<GetPolicyCountsUseCase>,
}
