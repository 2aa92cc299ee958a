use std::io::Write;

use tracing::trace;

use crate::body::Body;
use crate::protocol::{Direction, Message, SendError};

/// Serializes `message` into `sink`: the header first, then the body.
///
/// Only types implementing [`Body`] can appear in a [`Message`], so a
/// message over a non-conforming body never reaches this function.
///
/// # Errors
///
/// Returns the [`SendError`] of the first failing stage. Bytes already accepted
/// by `sink` before the failure stay there.
pub fn write<W, D, B, F>(sink: &mut W, message: &Message<D, B, F>) -> Result<(), SendError>
where
    W: Write + ?Sized,
    D: Direction,
    B: Body,
{
    write_header(sink, message)?;
    B::write(sink, message.body())?;

    trace!(is_request = D::IS_REQUEST, content_length = ?message.content_length(), "message written");
    Ok(())
}

/// Serializes the header of `message` into `sink`.
///
/// Start-line and field rendering is left to the fields collaborator; this
/// stage currently emits nothing.
///
/// # Errors
///
/// Never fails at the moment; the signature leaves room for a real header writer.
pub fn write_header<W, D, B, F>(_sink: &mut W, message: &Message<D, B, F>) -> Result<(), SendError>
where
    W: Write + ?Sized,
    D: Direction,
    B: Body,
{
    trace!(is_request = D::IS_REQUEST, version = message.version(), "skip header writing");
    Ok(())
}
