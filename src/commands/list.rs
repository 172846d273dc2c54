use std::path::Path;

use console::style;
use miette::Result;

use templatefinder::{find_all_templates, load_config};

pub fn run(pattern: String, config_path: String) -> Result<()> {
    let config = load_config(Path::new(&config_path))?;
    let templates = find_all_templates(&config, &pattern)?;

    if templates.is_empty() {
        println!("No templates match '{}'", style(&pattern).cyan());
        return Ok(());
    }

    for template in &templates {
        println!("{template}");
    }

    Ok(())
}
