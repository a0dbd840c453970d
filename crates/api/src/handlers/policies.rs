use crate::{
    dto::{PolicyCountResponse, PolicyCountsResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_policies")]
pub async fn get_policies(State(state): State<AppState>) -> Json<PolicyCountsResponse> {
    let counts = state.get_policy_counts.execute();
    let total: u64 = counts.iter().map(|c| c.count).sum();

    debug!(series = counts.len(), total, "Policy counts retrieved");

    Json(PolicyCountsResponse {
        total,
        policies: counts
            .into_iter()
            .map(|c| PolicyCountResponse {
                policy: c.policy,
                resolver: c.resolver,
                count: c.count,
            })
            .collect(),
    })
}
