use super::registry::MetricsResult;
use prometheus::{IntCounter, Opts, Registry};
use rpz_exporter_domain::config::MetricsConfig;

/// Ingest-side health counters, incremented concurrently by connection
/// handlers.
#[derive(Clone)]
pub struct IngestMetrics {
    connections: IntCounter,
    rejected_connections: IntCounter,
    frame_errors: IntCounter,
    parse_errors: IntCounter,
}

impl IngestMetrics {
    pub fn new(registry: &Registry, config: &MetricsConfig) -> MetricsResult<Self> {
        let connections = register_counter(
            registry,
            config,
            "connections_total",
            "Number of protobuf producer connections accepted",
        )?;
        let rejected_connections = register_counter(
            registry,
            config,
            "rejected_connections_total",
            "Number of protobuf producer connections refused by the admission limit",
        )?;
        let frame_errors = register_counter(
            registry,
            config,
            "frame_errors_total",
            "Number of frames discarded because of framing errors",
        )?;
        let parse_errors = register_counter(
            registry,
            config,
            "parse_errors_total",
            "Number of frames discarded because the payload did not decode",
        )?;

        Ok(Self {
            connections,
            rejected_connections,
            frame_errors,
            parse_errors,
        })
    }

    pub fn connection_accepted(&self) {
        self.connections.inc();
    }

    pub fn connection_rejected(&self) {
        self.rejected_connections.inc();
    }

    pub fn frame_error(&self) {
        self.frame_errors.inc();
    }

    pub fn parse_error(&self) {
        self.parse_errors.inc();
    }

    pub fn connections(&self) -> u64 {
        self.connections.get()
    }

    pub fn rejected_connections(&self) -> u64 {
        self.rejected_connections.get()
    }

    pub fn frame_errors(&self) -> u64 {
        self.frame_errors.get()
    }

    pub fn parse_errors(&self) -> u64 {
        self.parse_errors.get()
    }
}

fn register_counter(
    registry: &Registry,
    config: &MetricsConfig,
    name: &str,
    help: &str,
) -> MetricsResult<IntCounter> {
    let counter = IntCounter::with_opts(
        Opts::new(name, help)
            .namespace(config.namespace.clone())
            .subsystem(config.subsystem.clone()),
    )?;
    registry.register(Box::new(counter.clone()))?;
    Ok(counter)
}
