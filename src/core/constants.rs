pub const APP_TITLE: &str = "CONSOLE LOCALE";
pub const SERVICE_NAME: &str = "avantle-console";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key holding the chosen locale code.
pub const LOCALE_STORAGE_KEY: &str = "locale";

pub const CONFIG_DIR: &str = ".console";
pub const CONFIG_FILE: &str = "console.toml";
pub const DEFAULT_PREFERENCES_FILE: &str = ".console/preferences.toml";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const MIN_PORT: u16 = 1024;
pub const MAX_WORKERS: usize = 64;
