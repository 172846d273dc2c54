use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FinderError, Result};

/// Default config file name looked up by [`load_config`].
pub const CONFIG_FILE: &str = "templatefinder.toml";

/// One element of the loader configuration.
///
/// Deserialized untagged, so the shapes found in real configs all normalize
/// into the variant at parse time:
///
/// - a plain identifier string,
/// - a two-element `[name, [delegates...]]` pair (a wrapping loader and the
///   loaders it delegates to, e.g. a caching wrapper),
/// - a bare sequence of further specs — the historical misconfiguration in
///   which a group's name and its delegate sequence arrive as two top-level
///   siblings rather than one nested pair.
///
/// Nesting depth is unbounded. Anything that is neither a string nor a
/// sequence fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoaderSpec {
    Name(String),
    Group(String, Vec<LoaderSpec>),
    List(Vec<LoaderSpec>),
}

/// Everything the finder needs, passed explicitly to every entry point.
///
/// There is no ambient process-wide configuration: callers construct this
/// directly or load it from a `templatefinder.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Possibly nested loader configuration, outer loaders first.
    pub loaders: Vec<LoaderSpec>,

    /// Directories searched by the filesystem loader.
    pub dirs: Vec<PathBuf>,

    /// Installed-application roots. Each contributes its `templates/`
    /// subdirectory when that subdirectory exists.
    pub app_dirs: Vec<PathBuf>,

    /// Display-name overrides keyed by root-relative template path.
    pub display_names: BTreeMap<String, String>,
}

/// Load a [`FinderConfig`] from a `templatefinder.toml` file.
///
/// `path` may be the file itself or a directory containing it.
pub fn load_config(path: &Path) -> Result<FinderConfig> {
    let config_path = if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    };

    if !config_path.exists() {
        return Err(FinderError::ConfigNotFound { path: config_path });
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| FinderError::Io {
        context: format!("reading {}", config_path.display()),
        source: e,
    })?;

    let config: FinderConfig =
        toml::from_str(&content).map_err(|e| FinderError::ConfigParse { source: e })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_loader_names() {
        let config: FinderConfig = toml::from_str(
            r#"loaders = ["templates.loaders.filesystem", "templates.loaders.app_directories"]"#,
        )
        .unwrap();
        assert_eq!(
            config.loaders,
            vec![
                LoaderSpec::Name("templates.loaders.filesystem".into()),
                LoaderSpec::Name("templates.loaders.app_directories".into()),
            ]
        );
    }

    #[test]
    fn parse_nested_group() {
        let config: FinderConfig = toml::from_str(
            r#"loaders = [["templates.loaders.cached", ["templates.loaders.filesystem"]]]"#,
        )
        .unwrap();
        assert_eq!(
            config.loaders,
            vec![LoaderSpec::Group(
                "templates.loaders.cached".into(),
                vec![LoaderSpec::Name("templates.loaders.filesystem".into())],
            )]
        );
    }

    #[test]
    fn parse_malformed_sibling_form() {
        // The group name and its delegate sequence as two siblings instead
        // of one nested pair. The delegates parse as a bare List.
        let config: FinderConfig = toml::from_str(
            r#"loaders = ["templates.loaders.cached", ["templates.loaders.filesystem", "templates.loaders.app_directories"]]"#,
        )
        .unwrap();
        assert_eq!(
            config.loaders,
            vec![
                LoaderSpec::Name("templates.loaders.cached".into()),
                LoaderSpec::List(vec![
                    LoaderSpec::Name("templates.loaders.filesystem".into()),
                    LoaderSpec::Name("templates.loaders.app_directories".into()),
                ]),
            ]
        );
    }

    #[test]
    fn parse_display_names_and_dirs() {
        let config: FinderConfig = toml::from_str(
            r#"
loaders = ["templates.loaders.filesystem"]
dirs = ["/srv/app/templates"]

[display_names]
"404.html" = "Not found page"
"#,
        )
        .unwrap();
        assert_eq!(config.dirs, vec![PathBuf::from("/srv/app/templates")]);
        assert_eq!(
            config.display_names.get("404.html").map(String::as_str),
            Some("Not found page")
        );
    }

    #[test]
    fn empty_config_defaults() {
        let config: FinderConfig = toml::from_str("").unwrap();
        assert!(config.loaders.is_empty());
        assert!(config.dirs.is_empty());
        assert!(config.app_dirs.is_empty());
        assert!(config.display_names.is_empty());
    }

    #[test]
    fn load_config_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"loaders = ["templates.loaders.filesystem"]"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.loaders.len(), 1);
    }

    #[test]
    fn load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, FinderError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_config_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "loaders = not-a-value").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, FinderError::ConfigParse { .. }));
    }
}
