use std::io::Write;
use std::marker::PhantomData;

use super::Body;
use crate::protocol::SendError;

/// Element types whose in-memory representation is already their wire form.
pub trait RawElement: Copy {
    /// Views a slice of elements as its underlying bytes.
    fn as_raw_bytes(elements: &[Self]) -> &[u8];
}

impl RawElement for u8 {
    #[inline]
    fn as_raw_bytes(elements: &[u8]) -> &[u8] {
        elements
    }
}

impl RawElement for i8 {
    #[inline]
    fn as_raw_bytes(elements: &[i8]) -> &[u8] {
        // SAFETY: `i8` and `u8` have the same size and alignment and every bit
        // pattern is valid for both, so the reinterpreted slice covers exactly
        // the same initialized memory for the same lifetime.
        unsafe { std::slice::from_raw_parts(elements.as_ptr().cast::<u8>(), elements.len()) }
    }
}

/// A body held in a contiguous `Vec<T>`, written with a single bulk write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorBody<T = u8>(PhantomData<T>);

impl<T: RawElement> Body for VectorBody<T> {
    type Storage = Vec<T>;

    fn write<W>(sink: &mut W, storage: &Vec<T>) -> Result<(), SendError>
    where
        W: Write + ?Sized,
    {
        sink.write_all(T::as_raw_bytes(storage))?;
        Ok(())
    }

    fn content_length(storage: &Vec<T>) -> Option<u64> {
        Some(T::as_raw_bytes(storage).len() as u64)
    }
}
