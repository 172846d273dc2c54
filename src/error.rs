use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FinderError {
    #[error("Config not found at {path}")]
    #[diagnostic(help("Ensure the directory contains a templatefinder.toml file"))]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse templatefinder.toml")]
    #[diagnostic(help("Check the TOML syntax in your templatefinder.toml file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Glob pattern error: {pattern}")]
    #[diagnostic(help("Patterns use glob syntax: `*`, `?`, and `[...]` character classes"))]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

pub type Result<T> = std::result::Result<T, FinderError>;
