// src/setup/setup_toml.rs - first-run config file
use crate::core::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::core::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"[general]
# error | warn | info | debug | trace (RUST_LOG overrides)
log_level = "info"

[server]
host = "127.0.0.1"
# Ports below 1024 are reset to 8080
port = 8080
workers = 1
cors_enabled = true
request_logs = true

[storage]
# Where the chosen locale is remembered between sessions.
# Relative paths resolve against the directory that holds .console/
preferences_file = ".console/preferences.toml"
"#;

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Validation("Cannot determine executable directory".into()))?;
    ensure_config_in(base_dir).await
}

/// Writes the default config below `base_dir/.console/` unless one exists.
pub async fn ensure_config_in(base_dir: &Path) -> Result<PathBuf> {
    let config_dir = base_dir.join(CONFIG_DIR);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Created config directory {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Created default config {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}
