use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Cannot decode protobuf message: {0}")]
    MessageDecode(String),

    #[error("Metrics error: {0}")]
    Metrics(String),

    #[error("Aggregation queue closed")]
    QueueClosed,
}
