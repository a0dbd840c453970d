use crate::ports::{PolicyCounter, PolicyHitReporter};
use rpz_exporter_domain::{AppliedPolicy, DnsMessage, DomainError, PolicyHit};
use std::sync::Arc;
use tracing::trace;

/// What the aggregation step did with one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// Queries and other non-response records carry no applied policy.
    NotResponse,
    /// A response without a source address has no resolver identity.
    NoResolver,
    Counted {
        policy: AppliedPolicy,
        resolver: String,
    },
}

/// Classifies one record by applied policy and bumps the matching
/// (policy, resolver) counter. Driven by the single aggregation task.
pub struct RecordAppliedPolicyUseCase {
    counter: Arc<dyn PolicyCounter>,
    hit_reporter: Option<Arc<dyn PolicyHitReporter>>,
}

impl RecordAppliedPolicyUseCase {
    pub fn new(counter: Arc<dyn PolicyCounter>) -> Self {
        Self {
            counter,
            hit_reporter: None,
        }
    }

    pub fn with_hit_reporter(mut self, reporter: Arc<dyn PolicyHitReporter>) -> Self {
        self.hit_reporter = Some(reporter);
        self
    }

    pub fn execute(&self, message: DnsMessage) -> Result<PolicyOutcome, DomainError> {
        if !message.is_response() {
            trace!(message_type = message.message_type.as_str(), "Skipping non-response record");
            return Ok(PolicyOutcome::NotResponse);
        }

        let Some(resolver) = message.resolver_identity() else {
            return Ok(PolicyOutcome::NoResolver);
        };

        let policy = message.applied_policy();

        if !policy.is_clean() {
            if let Some(reporter) = &self.hit_reporter {
                if let Some(hit) = PolicyHit::from_message(&message, &policy) {
                    reporter.report(&hit);
                }
            }
        }

        self.counter.increment(policy.as_str(), &resolver)?;

        Ok(PolicyOutcome::Counted { policy, resolver })
    }
}
