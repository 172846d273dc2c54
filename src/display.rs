use std::collections::BTreeMap;
use std::path::Path;

use crate::config::FinderConfig;
use crate::error::Result;
use crate::finder::find_all_templates;

/// Human-readable label for a template path.
///
/// Precedence: the per-call `overrides` map, then the config's
/// `display_names` map, then a label derived from the basename with the
/// extension stripped, underscores turned into spaces, and the result
/// capitalized. Hyphens are preserved.
pub fn template_display_name(
    path: &str,
    config: &FinderConfig,
    overrides: Option<&BTreeMap<String, String>>,
) -> String {
    if let Some(name) = overrides.and_then(|map| map.get(path)) {
        return name.clone();
    }
    if let Some(name) = config.display_names.get(path) {
        return name.clone();
    }
    derive_display_name(path)
}

/// Enumerate templates matching `pattern` and pair each with its display
/// name, ready for a choice list.
pub fn template_choices(
    config: &FinderConfig,
    pattern: &str,
    overrides: Option<&BTreeMap<String, String>>,
) -> Result<Vec<(String, String)>> {
    Ok(find_all_templates(config, pattern)?
        .into_iter()
        .map(|path| {
            let name = template_display_name(&path, config, overrides);
            (path, name)
        })
        .collect())
}

fn derive_display_name(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    capitalize(&stem.replace('_', " "))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
