use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "templatefinder",
    about = "Find template files across configured template loaders",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List templates matching a glob pattern
    List {
        /// Glob to match against full path, basename, or root-relative path
        #[arg(default_value = "*.html")]
        pattern: String,

        /// Path to templatefinder.toml (or a directory containing it)
        #[arg(short, long, default_value = ".")]
        config: String,
    },

    /// List templates with their display names
    Choices {
        /// Glob to match against full path, basename, or root-relative path
        #[arg(default_value = "*.html")]
        pattern: String,

        /// Path to templatefinder.toml (or a directory containing it)
        #[arg(short, long, default_value = ".")]
        config: String,
    },

    /// Show the flattened loader configuration
    Loaders {
        /// Path to templatefinder.toml (or a directory containing it)
        #[arg(short, long, default_value = ".")]
        config: String,
    },
}
