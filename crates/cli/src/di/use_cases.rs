use rpz_exporter_application::use_cases::{
    ExportMetricsUseCase, GetPolicyCountsUseCase, RecordAppliedPolicyUseCase,
};
use rpz_exporter_domain::Config;
use rpz_exporter_infrastructure::metrics::MetricsRegistry;
use rpz_exporter_infrastructure::reporting::StdoutPolicyHitReporter;
use std::sync::Arc;

pub struct UseCases {
    pub export_metrics: Arc<ExportMetricsUseCase>,
    pub get_policy_counts: Arc<GetPolicyCountsUseCase>,
    pub record_applied_policy: RecordAppliedPolicyUseCase,
}

impl UseCases {
    pub fn new(config: &Config, registry: Arc<MetricsRegistry>) -> Self {
        let counter = registry.policy_counter();

        let mut record_applied_policy = RecordAppliedPolicyUseCase::new(counter.clone());
        if config.logging.policy_hits {
            record_applied_policy =
                record_applied_policy.with_hit_reporter(Arc::new(StdoutPolicyHitReporter::new()));
        }

        Self {
            export_metrics: Arc::new(ExportMetricsUseCase::new(registry)),
            get_policy_counts: Arc::new(GetPolicyCountsUseCase::new(counter)),
            record_applied_policy,
        }
    }
}
