//! Encoder rendering whole messages into a [`BytesMut`] buffer.
//!
//! [`MessageEncoder`] runs the same header-then-body pipeline as
//! [`write`](crate::codec::write), but targets the buffer type of the
//! `tokio_util` codec framework so it can be used with `FramedWrite` or a
//! [`MessageWriter`](crate::connection::MessageWriter).

use std::io;
use std::io::Write;

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::error;

use crate::body::Body;
use crate::codec::serializer;
use crate::protocol::{Direction, Message, SendError};

/// Buffer space reserved up front when the body size is unknown.
pub const INIT_BUFFER_SIZE: usize = 4 * 1024;

/// Encodes a borrowed [`Message`] into a bytes buffer.
///
/// On failure the destination buffer is cut back to the length it had before
/// the call, so a buffer only ever holds complete messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageEncoder;

impl MessageEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl<D, B, F> Encoder<&Message<D, B, F>> for MessageEncoder
where
    D: Direction,
    B: Body,
{
    type Error = SendError;

    fn encode(&mut self, item: &Message<D, B, F>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let start = dst.len();

        let reserve = item
            .content_length()
            .and_then(|length| usize::try_from(length).ok())
            .unwrap_or(INIT_BUFFER_SIZE);
        dst.reserve(reserve);

        let result = serializer::write(&mut FastWrite(&mut *dst), item);
        if let Err(e) = &result {
            error!(cause = %e, discarded = dst.len() - start, "failed to encode message");
            dst.truncate(start);
        }
        result
    }
}

/// Fast writer implementation for writing to BytesMut.
///
/// Writes never fail; the buffer grows as needed.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
