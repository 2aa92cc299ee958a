use bytes::BytesMut;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::codec::Encoder;
use tracing::trace;

use crate::body::Body;
use crate::codec::MessageEncoder;
use crate::protocol::{Direction, Message, SendError};

/// Buffered message sink over an asynchronous writer.
///
/// Encoding happens synchronously in [`write`](MessageWriter::write); only
/// [`flush`](MessageWriter::flush) awaits the underlying writer.
#[derive(Debug)]
pub struct MessageWriter<W> {
    writer: W,
    buffer: BytesMut,
    encoder: MessageEncoder,
}

impl<W> MessageWriter<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn with_capacity(writer: W, buffer_size: usize) -> Self {
        Self { writer, buffer: BytesMut::with_capacity(buffer_size), encoder: MessageEncoder::new() }
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Number of encoded bytes waiting for the next flush.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn clear_buf(&mut self) {
        self.buffer.clear();
    }

    /// Encodes `message` into the internal buffer.
    ///
    /// # Errors
    ///
    /// Returns the encoder's [`SendError`]; the buffer then holds only the
    /// messages written before this one.
    #[inline]
    pub fn write<D, B, F>(&mut self, message: &Message<D, B, F>) -> Result<(), SendError>
    where
        D: Direction,
        B: Body,
    {
        self.encoder.encode(message, &mut self.buffer)
    }

    /// Writes all buffered bytes to the underlying writer and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Io`] when the writer fails. Only the bytes the
    /// writer has not accepted stay buffered for the next flush.
    pub async fn flush(&mut self) -> Result<(), SendError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        trace!(bytes = self.buffer.len(), "flush buffered messages");
        // bytes the writer accepted are consumed even when a later write fails
        self.writer.write_all_buf(&mut self.buffer).await?;
        Ok(self.writer.flush().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use super::*;
    use crate::body::{EmptyBody, FileBody, ListBody, StringBody};
    use crate::protocol::{Request, Response};

    #[tokio::test]
    async fn flushes_encoded_messages() {
        let mut writer = MessageWriter::with_capacity(Vec::new(), 64);

        let request: Request<StringBody> = Request::new("ping;".to_string());
        let response: Response<ListBody<&str>> = Response::new(LinkedList::from(["po", "ng"]));
        writer.write(&request).unwrap();
        writer.write(&response).unwrap();

        assert_eq!(writer.buffered(), 9);
        assert!(writer.get_mut().is_empty());

        writer.flush().await.unwrap();

        assert_eq!(writer.buffered(), 0);
        assert_eq!(writer.into_inner(), b"ping;pong");
    }

    #[tokio::test]
    async fn flush_without_messages_is_a_no_op() {
        let mut writer = MessageWriter::with_capacity(Vec::new(), 0);
        writer.write(&Response::<EmptyBody>::default()).unwrap();

        writer.flush().await.unwrap();

        assert!(writer.into_inner().is_empty());
    }

    #[tokio::test]
    async fn failed_message_is_not_flushed() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = MessageWriter::with_capacity(Vec::new(), 64);

        writer.write(&Request::<StringBody>::new("ok".to_string())).unwrap();
        let missing: Request<FileBody> = Request::new(dir.path().join("missing"));
        assert!(matches!(writer.write(&missing), Err(SendError::OpenFile { .. })));
        writer.flush().await.unwrap();

        assert_eq!(writer.into_inner(), b"ok");
    }

    #[tokio::test]
    async fn writer_failure_is_reported() {
        struct Closed;

        impl AsyncWrite for Closed {
            fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, _buf: &[u8]) -> Poll<io::Result<usize>> {
                Poll::Ready(Err(io::Error::from(io::ErrorKind::BrokenPipe)))
            }

            fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
                Poll::Ready(Ok(()))
            }

            fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
                Poll::Ready(Ok(()))
            }
        }

        let mut writer = MessageWriter::with_capacity(Closed, 16);
        writer.write(&Response::<StringBody>::new("lost".to_string())).unwrap();

        let err = writer.flush().await.unwrap_err();
        assert!(matches!(err, SendError::Io { .. }));
    }

    #[tokio::test]
    async fn short_write_is_not_resent() {
        struct Flaky {
            accepted: Vec<u8>,
            budget: usize,
        }

        impl AsyncWrite for Flaky {
            fn poll_write(mut self: Pin<&mut Self>, _cx: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
                if self.budget == 0 {
                    self.budget = usize::MAX;
                    return Poll::Ready(Err(io::Error::from(io::ErrorKind::BrokenPipe)));
                }
                let n = buf.len().min(self.budget);
                self.accepted.extend_from_slice(&buf[..n]);
                self.budget -= n;
                Poll::Ready(Ok(n))
            }

            fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
                Poll::Ready(Ok(()))
            }

            fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
                Poll::Ready(Ok(()))
            }
        }

        let mut writer = MessageWriter::with_capacity(Flaky { accepted: Vec::new(), budget: 3 }, 16);
        writer.write(&Response::<StringBody>::new("hello".to_string())).unwrap();

        let err = writer.flush().await.unwrap_err();
        assert!(matches!(err, SendError::Io { .. }));
        assert_eq!(writer.buffered(), 2);

        writer.flush().await.unwrap();

        assert_eq!(writer.buffered(), 0);
        assert_eq!(writer.into_inner().accepted, b"hello");
    }
}
