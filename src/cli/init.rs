//! Init command: write the default configuration file

use crate::models::TallyConfig;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(config_path: &Path, force: bool) -> Result<()> {
    write_default_config(config_path, force)?;
    println!(
        "{}",
        format!("✅ Wrote default config to {}", config_path.display()).green()
    );
    Ok(())
}

/// Write the default config, refusing to replace an existing file unless `force` is set
pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    TallyConfig::default().save(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");
    Ok(())
}
