use crate::di::IngestServices;
use rpz_exporter_infrastructure::ingest::ConnectionAcceptor;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tracing::info;

/// Binds the protobuf listener and spawns its accept loop.
pub async fn start_ingest_server(
    bind_addr: SocketAddr,
    services: IngestServices,
    max_connections: Option<usize>,
) -> anyhow::Result<JoinHandle<()>> {
    let mut acceptor = ConnectionAcceptor::bind(bind_addr, services.handler, services.metrics)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind protobuf listener on {}: {}", bind_addr, e))?;

    if let Some(limit) = max_connections {
        info!(max_connections = limit, "Limiting concurrent protobuf connections");
        acceptor = acceptor.with_max_connections(limit);
    }

    Ok(tokio::spawn(acceptor.run()))
}
