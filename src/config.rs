mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
    toml::read_config,
};
use crate::document::Document;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

/// A default ID of a container element.
pub const DEFAULT_CONTAINER_ID: &str = "root";
/// A default host document.
pub const DEFAULT_DOCUMENT: &str =
    r#"<!DOCTYPE html><html><head></head><body><div id="root"></div></body></html>"#;

/// A rendering configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    container: String,
    document: Option<PathBuf>,
}

impl Config {
    /// Creates a configuration.
    pub const fn new(container: String, document: Option<PathBuf>) -> Self {
        Self {
            container,
            document,
        }
    }

    /// Returns an ID of a container element.
    #[allow(clippy::missing_const_for_fn)]
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Returns a path to a host document.
    pub fn document(&self) -> Option<&Path> {
        self.document.as_deref()
    }

    /// Sets an ID of a container element.
    pub fn set_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    /// Sets a path to a host document.
    pub fn set_document(mut self, document: Option<PathBuf>) -> Self {
        self.document = document;
        self
    }

    /// Loads a host document.
    pub fn load_document(&self) -> Result<Document, ConfigError> {
        Ok(match self.document() {
            Some(path) => Document::read(BufReader::new(File::open(path)?))?,
            None => Document::parse(DEFAULT_DOCUMENT),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID.into(), None)
    }
}
