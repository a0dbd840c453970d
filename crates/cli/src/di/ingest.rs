use rpz_exporter_domain::{Config, DnsMessage};
use rpz_exporter_infrastructure::ingest::{ConnectionHandler, MessageEmitter};
use rpz_exporter_infrastructure::metrics::{IngestMetrics, MetricsRegistry};
use rpz_exporter_infrastructure::protobuf::ProtobufMessageParser;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct IngestServices {
    pub handler: ConnectionHandler,
    pub metrics: IngestMetrics,
}

impl IngestServices {
    /// Returns the services plus the receiving end of the sink queue.
    pub fn new(
        config: &Config,
        registry: &MetricsRegistry,
    ) -> (Self, mpsc::Receiver<DnsMessage>) {
        let (emitter, receiver) = MessageEmitter::new(config.ingest.queue_capacity);
        let metrics = registry.ingest_metrics();

        let handler = ConnectionHandler::new(
            Arc::new(ProtobufMessageParser::new()),
            emitter,
            metrics.clone(),
        );

        (Self { handler, metrics }, receiver)
    }
}
