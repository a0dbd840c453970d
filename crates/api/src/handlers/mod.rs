pub mod health;
pub mod metrics;
pub mod policies;

pub use health::health_check;
pub use metrics::get_metrics;
pub use policies::get_policies;
