//! Message serialization.
//!
//! A message is written in two stages: the header, then the body through its
//! strategy's [`Body::write`](crate::body::Body::write). Both stages are
//! available against any [`std::io::Write`] sink:
//!
//! - [`write`]: the whole message
//! - [`write_header`]: the header stage alone
//!
//! [`MessageEncoder`] wraps the same pipeline as a `tokio_util` [`Encoder`](tokio_util::codec::Encoder)
//! producing [`BytesMut`](bytes::BytesMut) buffers.
//!
//! # Example
//!
//! ```
//! use micro_message::body::StringBody;
//! use micro_message::codec::write;
//! use micro_message::protocol::Request;
//!
//! let mut request: Request<StringBody> = Request::new("hello".to_string());
//! request.set_method("POST");
//! request.set_target("/greeting");
//!
//! let mut out = Vec::new();
//! write(&mut out, &request).unwrap();
//! assert_eq!(out, b"hello");
//! ```

mod message_encoder;
mod serializer;

pub use message_encoder::MessageEncoder;
pub use message_encoder::INIT_BUFFER_SIZE;
pub use serializer::write;
pub use serializer::write_header;
