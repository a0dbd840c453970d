use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Records buffered between connection handlers and the aggregation sink.
    /// Handlers wait when the queue is full.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Concurrent producer connections admitted; `None` means unbounded.
    #[serde(default)]
    pub max_connections: Option<usize>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
            max_connections: None,
        }
    }
}

fn default_queue_capacity() -> usize {
    1024
}
