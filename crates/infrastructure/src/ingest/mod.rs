pub mod acceptor;
pub mod connection;
pub mod emitter;
pub mod frame;
pub mod sink;

pub use acceptor::ConnectionAcceptor;
pub use connection::{ConnectionHandler, ConnectionSummary};
pub use emitter::MessageEmitter;
pub use frame::{FrameDecoder, FrameError, MAX_FRAME_LEN};
pub use sink::{AggregationSink, SinkStats};
