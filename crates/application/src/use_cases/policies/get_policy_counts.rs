use crate::ports::{PolicyCount, PolicyCounter};
use std::sync::Arc;

pub struct GetPolicyCountsUseCase {
    counter: Arc<dyn PolicyCounter>,
}

impl GetPolicyCountsUseCase {
    pub fn new(counter: Arc<dyn PolicyCounter>) -> Self {
        Self { counter }
    }

    /// Current counts ordered by policy, then resolver.
    pub fn execute(&self) -> Vec<PolicyCount> {
        let mut counts = self.counter.snapshot();
        counts.sort_by(|a, b| {
            a.policy
                .cmp(&b.policy)
                .then_with(|| a.resolver.cmp(&b.resolver))
        });
        counts
    }
}
