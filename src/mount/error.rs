use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A mount error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MountError {
    /// No element has the given container ID.
    ContainerNotFound(String),
}

impl Display for MountError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerNotFound(id) => write!(formatter, "container not found: #{id}"),
        }
    }
}

impl Error for MountError {}
