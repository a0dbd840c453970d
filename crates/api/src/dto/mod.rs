pub mod health;
pub mod policy;

pub use health::HealthResponse;
pub use policy::{PolicyCountResponse, PolicyCountsResponse};
