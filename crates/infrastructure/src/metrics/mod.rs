//! Prometheus-backed counter state.
//!
//! All series live in one [`MetricsRegistry`] owned by the process and passed
//! to both the ingest side (writers) and the scrape handler (reader). The
//! global default registry is never used.

pub mod ingest;
pub mod policy_counter;
pub mod registry;

pub use ingest::IngestMetrics;
pub use policy_counter::PrometheusPolicyCounter;
pub use registry::{MetricsError, MetricsRegistry, MetricsResult};
