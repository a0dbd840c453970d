pub mod get_policy_counts;
pub mod record_applied_policy;

pub use get_policy_counts::GetPolicyCountsUseCase;
pub use record_applied_policy::{PolicyOutcome, RecordAppliedPolicyUseCase};
