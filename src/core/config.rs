// src/core/config.rs
use crate::core::constants::{
    CONFIG_DIR, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PREFERENCES_FILE, MAX_WORKERS, MIN_PORT,
    VERSION,
};
use crate::core::error::{AppError, Result};
use crate::store::FileStorage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    server: Option<ServerConfigToml>,
    #[serde(default)]
    storage: Option<StorageConfigToml>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ServerConfigToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_workers")]
    workers: usize,
    #[serde(default = "default_true")]
    cors_enabled: bool,
    #[serde(default = "default_true")]
    request_logs: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct StorageConfigToml {
    #[serde(default = "default_preferences_file")]
    preferences_file: String,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}
fn default_host() -> String {
    DEFAULT_HOST.into()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_workers() -> usize {
    1
}
fn default_true() -> bool {
    true
}
fn default_preferences_file() -> String {
    DEFAULT_PREFERENCES_FILE.into()
}

#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub log_level: String,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub debug_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub cors_enabled: bool,
    pub request_logs: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub preferences_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            workers: 1,
            cors_enabled: true,
            request_logs: true,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_file: DEFAULT_PREFERENCES_FILE.into(),
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self> {
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => return Ok(config),
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        let mut config = Self::from_file(&path).await?;
        config.debug_info = Some(format!("New config: {}", path.display()));
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        let server = file
            .server
            .clone()
            .map_or_else(ServerConfig::default, |s| ServerConfig {
                host: s.host,
                port: Self::clamp_port(s.port),
                workers: s.workers.clamp(1, MAX_WORKERS),
                cors_enabled: s.cors_enabled,
                request_logs: s.request_logs,
            });

        let storage = file
            .storage
            .map_or_else(StorageConfig::default, |s| StorageConfig {
                preferences_file: s.preferences_file,
            });

        let config = Self {
            config_path: Some(path.as_ref().to_string_lossy().into_owned()),
            log_level: file.general.log_level,
            server,
            storage,
            debug_info: None,
        };

        // Auto-save corrected values
        if let Some(raw) = file.server {
            if raw.port != config.server.port || raw.workers != config.server.workers {
                log::warn!(
                    "Corrected server settings: port {} -> {}, workers {} -> {}",
                    raw.port,
                    config.server.port,
                    raw.workers,
                    config.server.workers
                );
                if let Err(e) = config.save().await {
                    log::warn!("Could not save corrected config {}: {}", path.as_ref().display(), e);
                }
            }
        }

        Ok(config)
    }

    pub async fn save(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        let file = ConfigFile {
            general: GeneralConfig {
                log_level: self.log_level.clone(),
            },
            server: Some(ServerConfigToml {
                host: self.server.host.clone(),
                port: self.server.port,
                workers: self.server.workers,
                cors_enabled: self.server.cors_enabled,
                request_logs: self.server.request_logs,
            }),
            storage: Some(StorageConfigToml {
                preferences_file: self.storage.preferences_file.clone(),
            }),
        };

        let content = toml::to_string_pretty(&file)
            .map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        if let Some(parent) = PathBuf::from(path).parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::Io)?;
        }

        tokio::fs::write(path, content).await.map_err(AppError::Io)
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// Preferences file. Relative paths resolve against the base directory:
    /// the parent of `.console/` when the config lives there, otherwise the
    /// config file's own directory.
    pub fn preferences_path(&self) -> PathBuf {
        let file = PathBuf::from(&self.storage.preferences_file);
        if file.is_absolute() {
            return file;
        }

        let Some(dir) = self.config_path.as_ref().and_then(|p| Path::new(p).parent()) else {
            return file;
        };
        let base = if dir.ends_with(CONFIG_DIR) {
            dir.parent().unwrap_or(dir)
        } else {
            dir
        };
        base.join(file)
    }

    /// Parsed `log_level`; `None` for anything `log` does not know.
    pub fn log_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.trim().parse().ok()
    }

    pub fn locale_storage(&self) -> FileStorage {
        FileStorage::new(self.preferences_path())
    }

    pub fn log_startup(&self) {
        log::info!("Console Locale v{}", VERSION);
        if let Some(info) = &self.debug_info {
            log::info!("{}", info);
        }
        log::info!(
            "Server: {} ({} workers), preferences: {}",
            self.server.bind_address(),
            self.server.workers,
            self.preferences_path().display()
        );
    }

    fn clamp_port(port: u16) -> u16 {
        if port < MIN_PORT {
            DEFAULT_PORT
        } else {
            port
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            debug_info: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_file_with_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.toml");
        std::fs::write(
            &path,
            "[general]\nlog_level = \"debug\"\n\n[server]\nhost = \"0.0.0.0\"\nport = 9000\nworkers = 4\ncors_enabled = false\n\n[storage]\npreferences_file = \"/tmp/prefs.toml\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.server.workers, 4);
        assert!(!config.server.cors_enabled);
        assert!(config.server.request_logs);
        assert_eq!(config.preferences_path(), PathBuf::from("/tmp/prefs.toml"));
    }

    #[tokio::test]
    async fn test_missing_sections_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[tokio::test]
    async fn test_out_of_range_values_are_corrected_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.toml");
        std::fs::write(&path, "[server]\nport = 80\nworkers = 0\n").unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.workers, 1);

        let reloaded = Config::from_file(&path).await.unwrap();
        assert_eq!(reloaded.server.port, DEFAULT_PORT);
    }

    #[tokio::test]
    async fn test_invalid_toml_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::from_file(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_relative_preferences_resolve_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".console");
        std::fs::create_dir_all(&config_dir).unwrap();
        let path = config_dir.join("console.toml");
        std::fs::write(&path, "[storage]\npreferences_file = \".console/preferences.toml\"\n")
            .unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.preferences_path(), config_dir.join("preferences.toml"));
    }

    #[test]
    fn test_log_filter_parses_known_levels() {
        let mut config = Config::default();
        assert_eq!(config.log_filter(), Some(log::LevelFilter::Info));

        config.log_level = " DEBUG ".into();
        assert_eq!(config.log_filter(), Some(log::LevelFilter::Debug));

        config.log_level = "verbose".into();
        assert_eq!(config.log_filter(), None);
    }

    #[tokio::test]
    async fn test_correction_survives_unwritable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.toml");
        std::fs::write(&path, "[server]\nport = 80\n").unwrap();

        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&path, perms).unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_default_config_has_no_path() {
        let config = Config::default();
        assert!(config.config_path().is_none());
        assert_eq!(
            config.preferences_path(),
            PathBuf::from(DEFAULT_PREFERENCES_FILE)
        );
    }
}
