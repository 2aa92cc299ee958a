use std::io::Write;

use bytes::Bytes;

use super::Body;
use crate::protocol::SendError;

/// A body held in a reference-counted [`Bytes`] buffer.
///
/// Cloning the storage is cheap, which makes this the strategy of choice when
/// the same payload is attached to many messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesBody;

impl Body for BytesBody {
    type Storage = Bytes;

    fn write<W>(sink: &mut W, storage: &Bytes) -> Result<(), SendError>
    where
        W: Write + ?Sized,
    {
        sink.write_all(storage)?;
        Ok(())
    }

    fn content_length(storage: &Bytes) -> Option<u64> {
        Some(storage.len() as u64)
    }
}
