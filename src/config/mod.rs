mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

/// Loads configuration from the YAML file at `CONFIG_PATH` (default
/// `config.yaml`) and the process environment.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path, |key| env::var(key).ok()).await
}

/// Reads `path`, overlays variables from `lookup` and validates the result.
///
/// A missing file is not an error: every field has a default and the API key
/// usually arrives through `OPENAI_API_KEY`.
pub async fn load_from<F>(path: impl AsRef<Path>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let mut config = match tokio::fs::read_to_string(path).await {
        Ok(config_str) => Config::from_yaml_str(&config_str)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.apply_env_overrides(lookup);
    config.validate()?;

    Ok(config)
}
