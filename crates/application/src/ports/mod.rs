mod message_parser;
mod metrics_exporter;
mod policy_counter;
mod policy_hit_reporter;

pub use message_parser::MessageParser;
pub use metrics_exporter::MetricsExporter;
pub use policy_counter::{PolicyCount, PolicyCounter};
pub use policy_hit_reporter::PolicyHitReporter;

// Re-export for convenience
pub use rpz_exporter_domain::DnsMessage;
