//! Message types and their header collaborators.
//!
//! - **Messages** ([`message`]): [`Message`] composes a direction tag, a
//!   [`Fields`] container and the storage of a [`Body`](crate::body::Body)
//!   strategy.
//!   - [`Request`] / [`Response`]: the two directions, chosen at the type level
//!   - [`Req`] / [`Res`]: the direction tags; [`Res`] carries the status code
//!
//! - **Fields** ([`fields`]): header metadata behind the [`Fields`] trait,
//!   with [`BasicFields`] as the default container.
//!
//! - **Errors** ([`error`]):
//!   - [`SendError`]: failures while writing a message
//!   - [`FieldError`]: fields the container refuses to store

mod message;
pub use message::Direction;
pub use message::Message;
pub use message::Req;
pub use message::Request;
pub use message::Res;
pub use message::Response;
pub use message::DEFAULT_STATUS;
pub use message::DEFAULT_VERSION;

mod fields;
pub use fields::BasicFields;
pub use fields::Fields;

mod error;
pub use error::FieldError;
pub use error::SendError;
