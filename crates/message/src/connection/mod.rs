//! Writing encoded messages to asynchronous transports.
//!
//! [`MessageWriter`] buffers messages encoded by
//! [`MessageEncoder`](crate::codec::MessageEncoder) and hands them to a
//! [`tokio::io::AsyncWrite`] on [`flush`](MessageWriter::flush).

mod message_writer;

pub use message_writer::MessageWriter;
