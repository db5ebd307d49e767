use super::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A serializable configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    container: Option<String>,
    document: Option<PathBuf>,
}

/// Compiles a serializable configuration with relative paths resolved against a directory.
pub fn compile_config(config: SerializableConfig, directory: &Path) -> Config {
    let mut compiled = Config::default();

    if let Some(container) = config.container {
        compiled = compiled.set_container(container);
    }

    if let Some(document) = config.document {
        compiled = compiled.set_document(Some(directory.join(document)));
    }

    compiled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONTAINER_ID;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn compile_empty_config() {
        let config = compile_config(toml::from_str("").unwrap(), Path::new("."));

        assert_eq!(config.container(), DEFAULT_CONTAINER_ID);
        assert_eq!(config.document(), None);
    }

    #[test]
    fn compile_full_config() {
        let config = compile_config(
            toml::from_str(indoc! {r#"
                container = "app"
                document = "pages/index.html"
            "#})
            .unwrap(),
            Path::new("/site"),
        );

        assert_eq!(config.container(), "app");
        assert_eq!(
            config.document(),
            Some(Path::new("/site/pages/index.html"))
        );
    }

    #[test]
    fn keep_absolute_document_path() {
        let config = compile_config(
            toml::from_str(r#"document = "/srv/index.html""#).unwrap(),
            Path::new("/site"),
        );

        assert_eq!(config.document(), Some(Path::new("/srv/index.html")));
    }

    #[test]
    fn reject_unknown_field() {
        assert!(toml::from_str::<SerializableConfig>("root = \"app\"").is_err());
    }
}
