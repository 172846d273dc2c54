use std::path::Path;

use console::style;
use miette::Result;

use templatefinder::{flatten_template_loaders, load_config, LoaderRegistry};

pub fn run(config_path: String) -> Result<()> {
    let config = load_config(Path::new(&config_path))?;
    let flattened = flatten_template_loaders(&config.loaders);

    if flattened.is_empty() {
        println!("No loaders configured");
        return Ok(());
    }

    let registry = LoaderRegistry::default();
    println!("{}\n", style("Configured loaders").bold());
    for name in &flattened {
        if registry.supports(name) {
            println!("  {name}");
        } else {
            println!("  {name} {}", style("(unsupported)").yellow());
        }
    }

    Ok(())
}
