use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::FinderConfig;

/// Canonical identifier of the filesystem loader kind.
pub const FILESYSTEM_LOADER: &str = "templates.loaders.filesystem";

/// Canonical identifier of the app-directories loader kind.
pub const APP_DIRECTORIES_LOADER: &str = "templates.loaders.app_directories";

/// The narrow interface every loader kind exposes: candidate template root
/// directories for a given name prefix. The finder always asks with an
/// empty prefix to obtain the roots themselves.
pub trait TemplateSources {
    fn template_sources(&self, prefix: &str) -> Vec<PathBuf>;
}

/// Loader over the explicitly configured template directories.
pub struct FilesystemLoader {
    dirs: Vec<PathBuf>,
}

impl FilesystemLoader {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl TemplateSources for FilesystemLoader {
    fn template_sources(&self, prefix: &str) -> Vec<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| {
                if prefix.is_empty() {
                    dir.clone()
                } else {
                    dir.join(prefix)
                }
            })
            .collect()
    }
}

/// Loader over the `templates/` subdirectory of each installed-application
/// root. Apps without one contribute nothing.
pub struct AppDirectoriesLoader {
    app_dirs: Vec<PathBuf>,
}

impl AppDirectoriesLoader {
    pub fn new(app_dirs: Vec<PathBuf>) -> Self {
        Self { app_dirs }
    }
}

impl TemplateSources for AppDirectoriesLoader {
    fn template_sources(&self, prefix: &str) -> Vec<PathBuf> {
        self.app_dirs
            .iter()
            .map(|app| app.join("templates"))
            .filter(|dir| dir.is_dir())
            .map(|dir| {
                if prefix.is_empty() {
                    dir
                } else {
                    dir.join(prefix)
                }
            })
            .collect()
    }
}

/// Builds a loader kind from the configuration it needs at construction.
pub type LoaderFactory = fn(&FinderConfig) -> Box<dyn TemplateSources>;

/// Maps loader identifiers to the factories that build them.
///
/// Identifiers not present in the registry are the "unsupported" kinds
/// (caching wrappers, archive loaders, custom loaders): the finder skips
/// them with a diagnostic rather than failing. [`LoaderRegistry::register`]
/// is the extension point for new kinds.
pub struct LoaderRegistry {
    factories: BTreeMap<String, LoaderFactory>,
}

impl LoaderRegistry {
    /// A registry with no loader kinds at all.
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, factory: LoaderFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn supports(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build the loader registered under `name`, or `None` for an
    /// unsupported kind.
    pub fn build(&self, name: &str, config: &FinderConfig) -> Option<Box<dyn TemplateSources>> {
        self.factories.get(name).map(|factory| factory(config))
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(FILESYSTEM_LOADER, |config| {
            Box::new(FilesystemLoader::new(config.dirs.clone()))
        });
        registry.register(APP_DIRECTORIES_LOADER, |config| {
            Box::new(AppDirectoriesLoader::new(config.app_dirs.clone()))
        });
        registry
    }
}
