//! `linkdeck init` — Write a default linkdeck.toml.

use linkdeck_config::{AppConfig, CONFIG_FILE};
use std::path::Path;

pub fn run(config_path: Option<&Path>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path.unwrap_or(Path::new(CONFIG_FILE));

    if path.exists() && !force {
        return Err(format!(
            "{} already exists — pass --force to overwrite",
            path.display()
        )
        .into());
    }

    std::fs::write(path, AppConfig::default_toml())?;
    println!("✅ Wrote {}", path.display());
    Ok(())
}
