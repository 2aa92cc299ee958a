//! Generic HTTP-like messages with pluggable body strategies
//!
//! This crate separates *where the bytes of a message body live* from *how they
//! are written out*. A message is parameterized at the type level by its
//! direction, a body strategy and a header-field container; serialization goes
//! through one code path whatever the body representation is.
//!
//! # Features
//!
//! - Body strategies for text, bytes, contiguous vectors, linked lists, files and empty bodies
//! - Compile-time rejection of types that do not satisfy the body contract
//! - Request and response messages as distinct types sharing one implementation
//! - Synchronous serialization to any `std::io::Write`
//! - A `tokio_util` encoder and a buffered writer for asynchronous transports
//! - Explicit, path-carrying errors for file-backed bodies
//!
//! # Example
//!
//! ```no_run
//! use std::collections::LinkedList;
//! use std::io;
//!
//! use tracing::{error, Level};
//! use tracing_subscriber::FmtSubscriber;
//! use micro_message::body::{FileBody, ListBody};
//! use micro_message::codec::write;
//! use micro_message::protocol::{Fields, Response};
//!
//! // Initialize logging
//! let subscriber = FmtSubscriber::builder()
//!     .with_max_level(Level::TRACE)
//!     .finish();
//! tracing::subscriber::set_global_default(subscriber)
//!     .expect("setting default subscriber failed");
//!
//! let mut response: Response<ListBody<String>> = Response::new(LinkedList::new());
//! response.set_reason("OK");
//! response.fields_mut().set("Content-Type", "text/plain").unwrap();
//! response.body_mut().extend(["hello", " ", "world"].map(String::from));
//!
//! write(&mut io::stdout(), &response).unwrap();
//!
//! let report: Response<FileBody> = Response::new("/var/log/report.txt".into());
//! if let Err(e) = write(&mut io::stdout(), &report) {
//!     error!(cause = %e, "report not sent");
//! }
//! ```
//!
//! # Architecture
//!
//! - [`body`]: the [`body::Body`] contract and the bundled strategies
//! - [`protocol`]: messages, header fields and error types
//! - [`codec`]: the header-then-body serialization pipeline
//! - [`connection`]: buffered writing to asynchronous transports
//!
//! # Body Contract
//!
//! A body strategy names a storage type and a function writing that storage to a
//! sink. [`protocol::Message`] owns exactly one storage value; the serializer calls
//! the strategy's write function with it. A type that does not implement
//! [`body::Body`] cannot be used as a message body at all, and the compiler reports
//! "Body requirements not met". [`is_body!`] exposes the same check as a constant.
//!
//! # Error Handling
//!
//! - [`protocol::SendError`]: serialization failures, including unreadable body files
//! - [`protocol::FieldError`]: header fields the container cannot store
//!
//! # Limitations
//!
//! - Header writing is a no-op; only bodies reach the sink
//! - No parsing, no chunked transfer encoding

pub mod body;
pub mod codec;
pub mod connection;
pub mod protocol;
