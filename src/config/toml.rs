use super::{Config, ConfigError, SerializableConfig, compile_config};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Reads a configuration file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    debug!("reading a configuration file: {}", path.display());

    let config = toml::from_str::<SerializableConfig>(&read_to_string(path)?)?;

    Ok(compile_config(
        config,
        path.parent().unwrap_or_else(|| Path::new(".")),
    ))
}
