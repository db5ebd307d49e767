use crate::document::DocumentError;
use core::error::Error;
use core::fmt::{self, Display, Formatter};
use std::io;

/// A configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error.
    Io(io::Error),
    /// A TOML deserialization error.
    Toml(toml::de::Error),
    /// A host document error.
    Document(DocumentError),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Toml(error) => write!(formatter, "{error}"),
            Self::Document(error) => write!(formatter, "{error}"),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        Self::Toml(error)
    }
}

impl From<DocumentError> for ConfigError {
    fn from(error: DocumentError) -> Self {
        Self::Document(error)
    }
}
