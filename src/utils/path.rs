use std::path::PathBuf;

/// Environment variable that redirects the config directory.
pub const CONFIG_DIR_ENV: &str = "PROUD100_CONFIG_DIR";

/// Get the config directory (`~/.config/proud100` unless overridden)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/"))
        .join(".config")
        .join("proud100")
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory for the log file
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("proud100")
}

/// Log file name inside [`get_log_dir`]
pub const LOG_FILE: &str = "proud100.log";
