//! CLI subcommand implementations.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::Path;

use invex_core::ExtractorConfig;

/// Load the extractor configuration from an explicit path, the default
/// location, or fall back to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ExtractorConfig> {
    if let Some(path) = config_path {
        return Ok(ExtractorConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        return Ok(ExtractorConfig::from_file(&default_path)?);
    }

    Ok(ExtractorConfig::default())
}
