use std::io;
use std::path::{Path, PathBuf};

use http::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("cannot open body file {path:?}: {source}")]
    OpenFile { path: PathBuf, source: io::Error },

    #[error("cannot read body file {path:?}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn open_file<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::OpenFile { path: path.as_ref().to_path_buf(), source }
    }

    pub fn read_file<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::ReadFile { path: path.as_ref().to_path_buf(), source }
    }

    /// Returns the body file path when the failure came from a file-backed body.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::OpenFile { path, .. } | Self::ReadFile { path, .. } => Some(path),
            Self::Io { .. } => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("invalid field name {name:?}: {source}")]
    InvalidName { name: String, source: InvalidHeaderName },

    #[error("invalid value for field {name:?}: {source}")]
    InvalidValue { name: String, source: InvalidHeaderValue },
}

impl FieldError {
    pub fn invalid_name<S: ToString>(name: S, source: InvalidHeaderName) -> Self {
        Self::InvalidName { name: name.to_string(), source }
    }

    pub fn invalid_value<S: ToString>(name: S, source: InvalidHeaderValue) -> Self {
        Self::InvalidValue { name: name.to_string(), source }
    }
}
