use crate::config::LoaderSpec;

/// Flatten a nested loader configuration into a linear list of loader
/// identifiers.
///
/// Traversal is depth-first pre-order: a group's own name is emitted before
/// its delegates, and a bare sequence splices its flattened contents in
/// place. Duplicate identifiers pass through unchanged; resolving them is
/// the caller's concern.
pub fn flatten_template_loaders(loaders: &[LoaderSpec]) -> Vec<String> {
    let mut out = Vec::new();
    for spec in loaders {
        flatten_into(spec, &mut out);
    }
    out
}

fn flatten_into(spec: &LoaderSpec, out: &mut Vec<String>) {
    match spec {
        LoaderSpec::Name(name) => out.push(name.clone()),
        LoaderSpec::Group(name, delegates) => {
            out.push(name.clone());
            for delegate in delegates {
                flatten_into(delegate, out);
            }
        }
        LoaderSpec::List(specs) => {
            for spec in specs {
                flatten_into(spec, out);
            }
        }
    }
}
