//! RPZ exporter domain layer
pub mod address;
pub mod config;
pub mod dns_message;
pub mod errors;
pub mod policy;
pub mod query_type;

pub use address::ip_from_octets;
pub use config::{CliOverrides, Config};
pub use dns_message::{DnsMessage, MessageType, Question, ResponseInfo};
pub use errors::DomainError;
pub use policy::{AppliedPolicy, PolicyHit, CLEAN_POLICY};
pub use query_type::QueryType;
