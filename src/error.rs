use crate::{config::ConfigError, document::DocumentError, mount::MountError};
use core::error;
use core::fmt::{self, Display, Formatter};
use std::io;

/// An error.
#[derive(Debug)]
pub enum Error {
    /// A configuration error.
    Config(ConfigError),
    /// A document error.
    Document(DocumentError),
    /// An I/O error.
    Io(io::Error),
    /// A JSON serialization error.
    Json(serde_json::Error),
    /// A mount error.
    Mount(MountError),
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(formatter, "{error}"),
            Self::Document(error) => write!(formatter, "{error}"),
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Json(error) => write!(formatter, "{error}"),
            Self::Mount(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<DocumentError> for Error {
    fn from(error: DocumentError) -> Self {
        Self::Document(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<MountError> for Error {
    fn from(error: MountError) -> Self {
        Self::Mount(error)
    }
}
