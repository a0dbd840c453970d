use super::registry::MetricsResult;
use prometheus::core::Collector;
use prometheus::{IntCounterVec, Opts, Registry};
use rpz_exporter_application::ports::{PolicyCount, PolicyCounter};
use rpz_exporter_domain::config::MetricsConfig;
use rpz_exporter_domain::DomainError;

const POLICY_LABEL: &str = "policy";
const RESOLVER_LABEL: &str = "resolver";

/// `<namespace>_<subsystem>_applied_policy_total{policy, resolver}`.
///
/// Each series is an atomic integer, so a scrape may run at any time
/// against the single writer.
#[derive(Clone)]
pub struct PrometheusPolicyCounter {
    applied_policy: IntCounterVec,
}

impl PrometheusPolicyCounter {
    pub fn new(registry: &Registry, config: &MetricsConfig) -> MetricsResult<Self> {
        let applied_policy = IntCounterVec::new(
            Opts::new(
                "applied_policy_total",
                "Number of packets applied in each received policyName",
            )
            .namespace(config.namespace.clone())
            .subsystem(config.subsystem.clone()),
            &[POLICY_LABEL, RESOLVER_LABEL],
        )?;
        registry.register(Box::new(applied_policy.clone()))?;

        Ok(Self { applied_policy })
    }
}

impl PolicyCounter for PrometheusPolicyCounter {
    fn increment(&self, policy: &str, resolver: &str) -> Result<(), DomainError> {
        self.applied_policy
            .get_metric_with_label_values(&[policy, resolver])
            .map_err(|e| DomainError::Metrics(e.to_string()))?
            .inc();
        Ok(())
    }

    fn snapshot(&self) -> Vec<PolicyCount> {
        let mut counts = Vec::new();
        for family in self.applied_policy.collect() {
            for metric in family.get_metric() {
                let mut policy = None;
                let mut resolver = None;
                for pair in metric.get_label() {
                    match pair.get_name() {
                        POLICY_LABEL => policy = Some(pair.get_value().to_string()),
                        RESOLVER_LABEL => resolver = Some(pair.get_value().to_string()),
                        _ => {}
                    }
                }
                if let (Some(policy), Some(resolver)) = (policy, resolver) {
                    counts.push(PolicyCount {
                        policy,
                        resolver,
                        count: metric.get_counter().get_value() as u64,
                    });
                }
            }
        }
        counts
    }
}
