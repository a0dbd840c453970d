use rpz_exporter_domain::{DnsMessage, DomainError};
use tokio::sync::mpsc;

/// Producer half of the delivery queue feeding the aggregation sink.
///
/// Cloned into every connection handler; the sink holds the only receiver.
#[derive(Clone)]
pub struct MessageEmitter {
    sender: mpsc::Sender<DnsMessage>,
}

impl MessageEmitter {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<DnsMessage>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { sender: tx }, rx)
    }

    /// Waits for queue space when the sink is behind.
    pub async fn emit(&self, message: DnsMessage) -> Result<(), DomainError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| DomainError::QueueClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl std::fmt::Debug for MessageEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageEmitter")
            .field("capacity", &self.sender.max_capacity())
            .field("closed", &self.is_closed())
            .finish()
    }
}
