use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct PolicyCountResponse {
    pub policy: String,
    pub resolver: String,
    pub count: u64,
}

#[derive(Serialize, Debug)]
pub struct PolicyCountsResponse {
    pub total: u64,
    pub policies: Vec<PolicyCountResponse>,
}
