use std::io::Write;

use super::Body;
use crate::protocol::SendError;

/// A body that has no content at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyBody;

impl Body for EmptyBody {
    type Storage = ();

    #[inline]
    fn write<W>(_sink: &mut W, _storage: &()) -> Result<(), SendError>
    where
        W: Write + ?Sized,
    {
        Ok(())
    }

    fn content_length(_storage: &()) -> Option<u64> {
        Some(0)
    }
}
