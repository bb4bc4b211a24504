use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::paths;
use crate::errors::ConfigError;

const TMP_SUFFIX: &str = "tmp";
const SUPPORTED_LOCALE: &str = "ru-RU";

/// User preferences for the roster front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the persisted slot holding the record list.
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    /// Overrides the directory the slot file lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    fn default_storage_key() -> String {
        "students".into()
    }

    fn default_locale() -> String {
        SUPPORTED_LOCALE.into()
    }

    /// Directory the record slot is stored in, given the application base directory.
    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| paths::data_dir_in(base))
    }

    pub fn locale_supported(&self) -> bool {
        self.locale == SUPPORTED_LOCALE
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: Self::default_storage_key(),
            locale: Self::default_locale(),
            data_dir: None,
        }
    }
}

/// Loads and saves [`Config`] under `<base>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(paths::config_dir_in(&base))?;
        let path = paths::config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    /// Like [`ConfigManager::load`], but writes the defaults on first run so the
    /// user has a file to edit.
    pub fn load_or_init(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            return self.load();
        }
        let config = Config::default();
        self.save(&config)?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
