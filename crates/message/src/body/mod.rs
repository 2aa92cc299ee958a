//! Body strategies.
//!
//! A body strategy decides two things at the type level: where the bytes of a
//! message body live ([`Body::Storage`]) and how they reach a sink
//! ([`Body::write`]). Strategies are never instantiated; a
//! [`Message`](crate::protocol::Message) owns one `Storage` value and the
//! serializer calls the strategy's `write` with it.
//!
//! # Strategies
//!
//! | strategy | storage | output |
//! |---|---|---|
//! | [`StringBody`] | `String` | the text, verbatim |
//! | [`BytesBody`] | [`bytes::Bytes`] | the bytes, verbatim |
//! | [`VectorBody<T>`] | `Vec<T>` | raw element bytes in one write |
//! | [`ListBody<T>`] | `LinkedList<T>` | each element's `Display` form, in order |
//! | [`FileBody`] | `PathBuf` | the file contents, streamed in chunks |
//! | [`EmptyBody`] | `()` | nothing |
//!
//! # Capability check
//!
//! Any type implementing [`Body`] qualifies, whatever else it is. Using a type
//! that does not is rejected while type-checking, never at runtime:
//!
//! ```compile_fail
//! use micro_message::protocol::Request;
//!
//! struct NotABody;
//!
//! // error: Body requirements not met
//! let request: Request<NotABody> = Request::default();
//! ```
//!
//! The storage type has to be declared as `Storage`:
//!
//! ```compile_fail
//! use std::io::Write;
//!
//! use micro_message::body::Body;
//! use micro_message::protocol::SendError;
//!
//! struct MisnamedStorage;
//!
//! // error: `BodyType` is not a member of trait `Body`
//! impl Body for MisnamedStorage {
//!     type BodyType = String;
//!
//!     fn write<W: Write + ?Sized>(sink: &mut W, body: &String) -> Result<(), SendError> {
//!         Ok(sink.write_all(body.as_bytes())?)
//!     }
//! }
//! ```
//!
//! and `write` has to take the storage it serializes:
//!
//! ```compile_fail
//! use std::io::Write;
//!
//! use micro_message::body::Body;
//! use micro_message::protocol::SendError;
//!
//! struct WriteWithoutStorage;
//!
//! // error: method `write` has 1 parameter but the declaration in trait `Body::write` has 2
//! impl Body for WriteWithoutStorage {
//!     type Storage = String;
//!
//!     fn write<W: Write + ?Sized>(sink: &mut W) -> Result<(), SendError> {
//!         Ok(sink.write_all(b"void")?)
//!     }
//! }
//! ```
//!
//! [`is_body!`](crate::is_body) answers the same question as a `const bool`.

use std::io::Write;

use crate::protocol::SendError;

mod bytes_body;
mod empty_body;
mod file_body;
mod list_body;
mod string_body;
mod vector_body;

pub use bytes_body::BytesBody;
pub use empty_body::EmptyBody;
pub use file_body::FileBody;
pub use list_body::ListBody;
pub use string_body::StringBody;
pub use vector_body::{RawElement, VectorBody};

/// Capability contract for message body strategies.
#[diagnostic::on_unimplemented(
    message = "Body requirements not met: `{Self}` does not implement `Body`",
    label = "not a body strategy",
    note = "a body strategy declares `type Storage` and `fn write(sink, &Self::Storage)`"
)]
pub trait Body {
    /// In-memory representation of the body content.
    type Storage;

    /// Serializes `storage` into `sink`.
    ///
    /// Implementations only read `storage` and only write to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] when the sink rejects bytes or the body's own
    /// source cannot be read.
    fn write<W>(sink: &mut W, storage: &Self::Storage) -> Result<(), SendError>
    where
        W: Write + ?Sized;

    /// Number of bytes `write` will emit, when it is known without doing I/O.
    fn content_length(_storage: &Self::Storage) -> Option<u64> {
        None
    }
}

/// Evaluates to `true` when the given type implements [`Body`], `false` otherwise.
///
/// The answer is a constant computed during type-checking, so it can be used
/// in `const` contexts. It only works on concrete types, not on generic
/// parameters.
///
/// ```
/// use micro_message::body::StringBody;
/// use micro_message::is_body;
///
/// struct Unrelated;
///
/// const _: () = assert!(is_body!(StringBody));
/// const _: () = assert!(!is_body!(Unrelated));
/// ```
#[macro_export]
macro_rules! is_body {
    ($ty:ty) => {{
        #[allow(dead_code, reason = "the default only answers for non-body types")]
        trait NotBody {
            const IS_BODY: bool = false;
        }

        impl<T: ?Sized> NotBody for T {}

        #[allow(dead_code, reason = "never constructed, only named")]
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        #[allow(dead_code, reason = "only reached when the probed type is a body")]
        impl<T: ?Sized + $crate::body::Body> Probe<T> {
            const IS_BODY: bool = true;
        }

        <Probe<$ty>>::IS_BODY
    }};
}
