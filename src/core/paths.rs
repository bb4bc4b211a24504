use dirs::home_dir;
use std::{env, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".roster_core";
const HOME_ENV: &str = "ROSTER_CORE_HOME";
const DATA_DIR: &str = "data";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory: `$ROSTER_CORE_HOME`, else `~/.roster_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding persisted record slots.
pub fn data_dir_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR)
}

pub fn config_dir_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    config_dir_in(base).join(CONFIG_FILE)
}
