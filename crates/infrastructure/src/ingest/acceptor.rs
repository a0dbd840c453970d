use super::connection::ConnectionHandler;
use crate::metrics::IngestMetrics;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// Pause after a failed accept so fd exhaustion does not spin the loop.
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Accepts producer connections and gives each its own task.
pub struct ConnectionAcceptor {
    listener: TcpListener,
    handler: Arc<ConnectionHandler>,
    metrics: IngestMetrics,
    admission: Option<Arc<Semaphore>>,
}

impl ConnectionAcceptor {
    /// Failing to bind is not recoverable; callers treat it as fatal.
    pub async fn bind(
        addr: SocketAddr,
        handler: ConnectionHandler,
        metrics: IngestMetrics,
    ) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(bind_address = %listener.local_addr()?, "Listening for protobuf streams");

        Ok(Self {
            listener,
            handler: Arc::new(handler),
            metrics,
            admission: None,
        })
    }

    /// Caps concurrent connections; extra connections are closed on accept.
    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.admission = Some(Arc::new(Semaphore::new(max_connections)));
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run(self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => self.dispatch(stream, peer),
                Err(e) => {
                    error!(error = %e, "Error accepting protobuf connection");
                    tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                }
            }
        }
    }

    fn dispatch(&self, stream: TcpStream, peer: SocketAddr) {
        let permit = match &self.admission {
            Some(semaphore) => match Arc::clone(semaphore).try_acquire_owned() {
                Ok(permit) => Some(permit),
                Err(_) => {
                    self.metrics.connection_rejected();
                    warn!(peer = %peer, "Rejecting protobuf connection: connection limit reached");
                    return;
                }
            },
            None => None,
        };

        self.metrics.connection_accepted();

        if let Err(e) = stream.set_nodelay(true) {
            debug!(peer = %peer, error = %e, "Failed to set TCP_NODELAY");
        }

        let handler = Arc::clone(&self.handler);
        tokio::spawn(async move {
            let _permit = permit;
            handler.handle(stream, peer).await;
        });
    }
}
