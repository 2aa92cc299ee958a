use std::collections::LinkedList;
use std::fmt::Display;
use std::io::Write;
use std::marker::PhantomData;

use super::Body;
use crate::protocol::SendError;

/// A body held in a `LinkedList<T>`.
///
/// Elements are written one at a time, in order, each in its [`Display`]
/// form and without separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBody<T>(PhantomData<T>);

impl<T: Display> Body for ListBody<T> {
    type Storage = LinkedList<T>;

    fn write<W>(sink: &mut W, storage: &LinkedList<T>) -> Result<(), SendError>
    where
        W: Write + ?Sized,
    {
        for element in storage {
            write!(sink, "{element}")?;
        }
        Ok(())
    }
}
