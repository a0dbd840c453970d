use super::emitter::MessageEmitter;
use super::frame::{FrameDecoder, FrameError};
use crate::metrics::IngestMetrics;
use rpz_exporter_application::ports::MessageParser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tracing::{debug, info, warn};

/// Per-connection totals, reported when the connection closes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionSummary {
    pub delivered: u64,
    pub frame_errors: u64,
    pub parse_errors: u64,
}

/// Drives one producer connection: frame, parse, hand off to the sink.
///
/// Bad frames and undecodable payloads are dropped and the connection keeps
/// going; only the end of the stream (or a closed sink) stops it.
pub struct ConnectionHandler {
    parser: Arc<dyn MessageParser>,
    emitter: MessageEmitter,
    metrics: IngestMetrics,
}

impl ConnectionHandler {
    pub fn new(
        parser: Arc<dyn MessageParser>,
        emitter: MessageEmitter,
        metrics: IngestMetrics,
    ) -> Self {
        Self {
            parser,
            emitter,
            metrics,
        }
    }

    /// Consumes `stream`; it is dropped, and so closed, on every return path.
    pub async fn handle<S>(&self, stream: S, peer: SocketAddr) -> ConnectionSummary
    where
        S: AsyncRead + Unpin,
    {
        info!(peer = %peer, "Protobuf connection established");

        let mut decoder = FrameDecoder::new(stream);
        let mut summary = ConnectionSummary::default();

        loop {
            let payload = match decoder.read_frame().await {
                Ok(payload) => payload,
                Err(e) if e.is_stream_end() => {
                    if !matches!(e, FrameError::StreamEnded) {
                        self.metrics.frame_error();
                        summary.frame_errors += 1;
                        warn!(peer = %peer, error = %e, "Protobuf stream ended mid-frame");
                    }
                    break;
                }
                Err(e) => {
                    self.metrics.frame_error();
                    summary.frame_errors += 1;
                    warn!(peer = %peer, error = %e, "Discarding protobuf frame");
                    continue;
                }
            };

            let message = match self.parser.parse(payload) {
                Ok(message) => message,
                Err(e) => {
                    self.metrics.parse_error();
                    summary.parse_errors += 1;
                    warn!(peer = %peer, error = %e, "Cannot unmarshal protobuf message");
                    continue;
                }
            };

            if let Err(e) = self.emitter.emit(message).await {
                warn!(peer = %peer, error = %e, "Aggregation sink gone, dropping connection");
                break;
            }
            summary.delivered += 1;
        }

        debug!(
            peer = %peer,
            delivered = summary.delivered,
            frame_errors = summary.frame_errors,
            parse_errors = summary.parse_errors,
            "Protobuf connection closed"
        );

        summary
    }
}
