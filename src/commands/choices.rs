use std::path::Path;

use console::style;
use miette::Result;

use templatefinder::{load_config, template_choices};

pub fn run(pattern: String, config_path: String) -> Result<()> {
    let config = load_config(Path::new(&config_path))?;
    let choices = template_choices(&config, &pattern, None)?;

    if choices.is_empty() {
        println!("No templates match '{}'", style(&pattern).cyan());
        return Ok(());
    }

    for (path, name) in &choices {
        println!("{path}\t{}", style(name).dim());
    }

    Ok(())
}
