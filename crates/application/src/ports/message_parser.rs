use rpz_exporter_domain::{DnsMessage, DomainError};

/// Decodes one frame payload into a typed DNS transaction record.
pub trait MessageParser: Send + Sync {
    fn parse(&self, payload: &[u8]) -> Result<DnsMessage, DomainError>;
}
