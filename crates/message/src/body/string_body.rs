use std::io::Write;

use super::Body;
use crate::protocol::SendError;

/// A body held in a `String`, written out verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringBody;

impl Body for StringBody {
    type Storage = String;

    fn write<W>(sink: &mut W, storage: &String) -> Result<(), SendError>
    where
        W: Write + ?Sized,
    {
        sink.write_all(storage.as_bytes())?;
        Ok(())
    }

    fn content_length(storage: &String) -> Option<u64> {
        Some(storage.len() as u64)
    }
}
