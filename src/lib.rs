//! Find template files across configured template loaders.
//!
//! The loader configuration is a possibly nested sequence of loader
//! identifiers ([`LoaderSpec`]); [`flatten_template_loaders`] normalizes it
//! into a flat ordered list, and [`find_all_templates`] walks the root
//! directories of the supported loader kinds to collect relative template
//! paths matching a glob pattern. [`template_display_name`] turns a
//! discovered path into a human-friendly label for choice lists.

pub mod config;
pub mod display;
pub mod error;
pub mod finder;
pub mod flatten;
pub mod loaders;

pub use config::{load_config, FinderConfig, LoaderSpec};
pub use display::{template_choices, template_display_name};
pub use error::{FinderError, Result};
pub use finder::{find_all_templates, find_templates_with, DEFAULT_PATTERN};
pub use flatten::flatten_template_loaders;
pub use loaders::{LoaderRegistry, TemplateSources};
