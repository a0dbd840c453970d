use rpz_exporter_domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyCount {
    pub policy: String,
    pub resolver: String,
    pub count: u64,
}

/// Monotonic (policy, resolver) counter state.
///
/// Implementations must allow `snapshot` to run concurrently with
/// `increment`. Each series is read atomically; a snapshot is not required
/// to be consistent across series.
pub trait PolicyCounter: Send + Sync {
    fn increment(&self, policy: &str, resolver: &str) -> Result<(), DomainError>;

    fn snapshot(&self) -> Vec<PolicyCount>;

    fn count(&self, policy: &str, resolver: &str) -> u64 {
        self.snapshot()
            .into_iter()
            .find(|c| c.policy == policy && c.resolver == resolver)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}
