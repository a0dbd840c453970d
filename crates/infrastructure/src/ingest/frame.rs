//! Length-prefixed framing: every frame is a 2-byte big-endian length `L`
//! followed by exactly `L` payload bytes.

use std::io;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Largest body the 16-bit prefix can announce.
pub const MAX_FRAME_LEN: usize = u16::MAX as usize;

const LENGTH_PREFIX_LEN: usize = 2;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("stream ended")]
    StreamEnded,

    #[error("incomplete length prefix: got {received} of 2 bytes")]
    IncompleteHeader { received: usize },

    #[error("incomplete frame body: got {received} of {expected} bytes")]
    IncompleteBody { expected: usize, received: usize },

    #[error("frame of {len} bytes exceeds limit of {max} bytes")]
    OversizedFrame { len: usize, max: usize },

    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

impl FrameError {
    /// Whether the underlying stream is gone and no further frame can follow.
    ///
    /// Short reads only happen at end of stream, so truncated frames are
    /// terminal as well. Read errors are terminal unless transient.
    pub fn is_stream_end(&self) -> bool {
        match self {
            FrameError::StreamEnded
            | FrameError::IncompleteHeader { .. }
            | FrameError::IncompleteBody { .. } => true,
            FrameError::OversizedFrame { .. } => false,
            FrameError::Io(e) => !matches!(
                e.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
            ),
        }
    }
}

/// Pulls frames off a byte stream, reusing one body buffer.
///
/// The prefix is 16 bits wide, so no announced length can exceed
/// [`MAX_FRAME_LEN`] and [`FrameError::OversizedFrame`] is never produced.
pub struct FrameDecoder<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R> FrameDecoder<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    pub async fn read_length(&mut self) -> Result<u16, FrameError> {
        let mut header = [0u8; LENGTH_PREFIX_LEN];
        match read_full(&mut self.reader, &mut header).await? {
            0 => Err(FrameError::StreamEnded),
            LENGTH_PREFIX_LEN => Ok(u16::from_be_bytes(header)),
            received => Err(FrameError::IncompleteHeader { received }),
        }
    }

    pub async fn read_payload(&mut self, len: u16) -> Result<&[u8], FrameError> {
        let len = usize::from(len);
        if self.buf.len() < len {
            self.buf.resize(len, 0);
        }

        let received = read_full(&mut self.reader, &mut self.buf[..len]).await?;
        if received < len {
            return Err(FrameError::IncompleteBody {
                expected: len,
                received,
            });
        }

        Ok(&self.buf[..len])
    }

    pub async fn read_frame(&mut self) -> Result<&[u8], FrameError> {
        let len = self.read_length().await?;
        self.read_payload(len).await
    }
}

/// Reads until `buf` is full or the stream ends, returning the byte count.
async fn read_full<R>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
