use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

use tracing::{error, trace};

use super::Body;
use crate::protocol::SendError;

/// A body whose content is the file at the stored path.
///
/// The message only owns the path. The file is opened when the body is
/// written and streamed to the sink in [`FileBody::CHUNK_SIZE`] pieces; the
/// handle is dropped on every way out of [`Body::write`], including errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileBody;

impl FileBody {
    /// Size of each read from the file.
    pub const CHUNK_SIZE: usize = 4096;
}

impl Body for FileBody {
    type Storage = PathBuf;

    fn write<W>(sink: &mut W, storage: &PathBuf) -> Result<(), SendError>
    where
        W: Write + ?Sized,
    {
        let path = storage.as_path();
        let mut file = File::open(path).map_err(|e| {
            error!(path = %path.display(), cause = %e, "failed to open body file");
            SendError::open_file(path, e)
        })?;

        let mut buf = [0_u8; FileBody::CHUNK_SIZE];
        let mut written = 0_usize;
        loop {
            let n = match file.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!(path = %path.display(), cause = %e, written, "failed to read body file");
                    return Err(SendError::read_file(path, e));
                }
            };

            sink.write_all(&buf[..n])?;
            written += n;
        }

        trace!(path = %path.display(), written, "file body written");
        Ok(())
    }
}
