use std::collections::BTreeSet;
use std::path::Path;

use globset::{Glob, GlobMatcher};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::FinderConfig;
use crate::error::{FinderError, Result};
use crate::flatten::flatten_template_loaders;
use crate::loaders::LoaderRegistry;

/// Pattern used when the caller does not care beyond "HTML templates".
pub const DEFAULT_PATTERN: &str = "*.html";

/// Find all templates matching `pattern` across the configured loaders.
///
/// The loader configuration is flattened first; each supported loader kind
/// contributes its root directories, which are walked recursively. A file
/// is included when the glob matches its full path, its basename, or its
/// path relative to the root it was found under. Unsupported loader kinds
/// are skipped with a debug-level diagnostic.
///
/// Returns root-relative paths, deduplicated and in ascending lexical order.
pub fn find_all_templates(config: &FinderConfig, pattern: &str) -> Result<Vec<String>> {
    find_templates_with(config, pattern, &LoaderRegistry::default())
}

/// Like [`find_all_templates`], but consulting a caller-supplied registry of
/// loader kinds.
pub fn find_templates_with(
    config: &FinderConfig,
    pattern: &str,
    registry: &LoaderRegistry,
) -> Result<Vec<String>> {
    let matcher = Glob::new(pattern)
        .map_err(|e| FinderError::GlobPattern {
            pattern: pattern.to_string(),
            source: e,
        })?
        .compile_matcher();

    let mut templates = BTreeSet::new();
    for loader_name in flatten_template_loaders(&config.loaders) {
        let Some(loader) = registry.build(&loader_name, config) else {
            debug!("{loader_name} is not supported");
            continue;
        };

        let roots = loader.template_sources("");
        debug!("{loader_name} contributed {} root(s)", roots.len());
        for root in roots {
            collect_from_root(&root, &matcher, &mut templates);
        }
    }

    Ok(templates.into_iter().collect())
}

fn collect_from_root(root: &Path, matcher: &GlobMatcher, templates: &mut BTreeSet<String>) {
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let full = entry.path();
        let relative = full
            .strip_prefix(root)
            .expect("walked entry must be under its root");
        let relative = relative.to_string_lossy();
        let basename = entry.file_name().to_string_lossy();

        if matcher.is_match(full)
            || matcher.is_match(basename.as_ref())
            || matcher.is_match(relative.as_ref())
        {
            templates.insert(relative.into_owned());
        }
    }
}
