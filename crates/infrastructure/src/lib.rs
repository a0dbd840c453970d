pub mod ingest;
pub mod metrics;
pub mod protobuf;
pub mod reporting;
