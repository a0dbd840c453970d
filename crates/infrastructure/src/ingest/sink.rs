use rpz_exporter_application::use_cases::{PolicyOutcome, RecordAppliedPolicyUseCase};
use rpz_exporter_domain::DnsMessage;
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SinkStats {
    pub counted: u64,
    pub not_response: u64,
    pub no_resolver: u64,
    pub failed: u64,
}

/// Sole consumer of the delivery queue and sole writer of the policy
/// counters. Records are classified strictly one at a time.
pub struct AggregationSink {
    use_case: RecordAppliedPolicyUseCase,
}

impl AggregationSink {
    pub fn new(use_case: RecordAppliedPolicyUseCase) -> Self {
        Self { use_case }
    }

    pub fn start(self, rx: mpsc::Receiver<DnsMessage>) -> tokio::task::JoinHandle<SinkStats> {
        tokio::spawn(self.run(rx))
    }

    /// Drains the queue until every emitter has been dropped.
    pub async fn run(self, mut rx: mpsc::Receiver<DnsMessage>) -> SinkStats {
        debug!("AggregationSink: Starting consumer");

        let mut stats = SinkStats::default();

        while let Some(message) = rx.recv().await {
            match self.use_case.execute(message) {
                Ok(PolicyOutcome::Counted { .. }) => stats.counted += 1,
                Ok(PolicyOutcome::NotResponse) => stats.not_response += 1,
                Ok(PolicyOutcome::NoResolver) => stats.no_resolver += 1,
                Err(e) => {
                    stats.failed += 1;
                    warn!(error = %e, "AggregationSink: Failed to record applied policy");
                }
            }
        }

        debug!(
            counted = stats.counted,
            not_response = stats.not_response,
            no_resolver = stats.no_resolver,
            failed = stats.failed,
            "AggregationSink: Consumer shutting down"
        );

        stats
    }
}
