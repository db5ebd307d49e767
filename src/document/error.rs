use core::error::Error;
use core::fmt::{self, Display, Formatter};
use std::io;

/// A document error.
#[derive(Debug)]
pub enum DocumentError {
    /// An I/O error while reading or serializing a document.
    Io(io::Error),
}

impl Display for DocumentError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "{error}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
        }
    }
}

impl From<io::Error> for DocumentError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}
