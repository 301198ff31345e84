// lib/src/config/config_helpers.rs
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use serde_yaml2 as serde_yaml;
use crate::config::config_constants::DEFAULT_APP_CONFIG_PATH_RELATIVE;
use crate::config::config_structs::{AppConfig, AppConfigWrapper};

/// Loads the application config. A missing file is not an error: defaults are used.
pub fn load_app_config(config_file_path: Option<&Path>) -> Result<AppConfig> {
    let path_to_use = config_file_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_CONFIG_PATH_RELATIVE));

    info!("Attempting to load app config from {:?}", path_to_use);

    if !path_to_use.exists() {
        warn!("Config file not found at {}. Using default app config.", path_to_use.display());
        return Ok(AppConfig::default());
    }

    let config_content = fs::read_to_string(&path_to_use)
        .context(format!("Failed to read app config file: {}", path_to_use.display()))?;
    debug!("App config content: {}", config_content);

    let wrapper: AppConfigWrapper = serde_yaml::from_str(&config_content).map_err(|e| {
        error!("YAML parsing error for app config at {:?}: {:?}", path_to_use, e);
        anyhow!("Failed to parse app config YAML: {}", path_to_use.display())
    })?;

    wrapper.app.validate()
        .map_err(|e| anyhow!("Invalid app config {}: {}", path_to_use.display(), e))?;
    info!("Loaded app config: {:?}", wrapper.app);
    Ok(wrapper.app)
}

pub fn save_app_config(config: &AppConfig, config_file_path: &Path) -> Result<()> {
    let wrapper = AppConfigWrapper { app: config.clone() };
    let yaml_string = serde_yaml::to_string(&wrapper)
        .map_err(|e| anyhow!("Failed to serialize AppConfig to YAML: {:?}", e))?;

    if let Some(parent) = config_file_path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create parent directories for {}", config_file_path.display()))?;
    }

    fs::write(config_file_path, yaml_string)
        .context(format!("Failed to write AppConfig to file: {}", config_file_path.display()))?;

    Ok(())
}
