use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::{PersistenceBackend, Result};

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const FALLBACK_KEY: &str = "students";

/// Stores the slot as `<data_dir>/<key>.json`, replacing it atomically on every write.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(data_dir: impl Into<PathBuf>, key: &str) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        let path = data_dir.join(format!("{}.{}", canonical_key(key), SLOT_EXTENSION));
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&self.path);
        write_file(&tmp, blob)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        FALLBACK_KEY.into()
    } else {
        sanitized
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

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_absent() {
        let temp = TempDir::new().expect("temp dir");
        let backend = JsonFileBackend::new(temp.path(), "students").unwrap();
        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_returns_blob() {
        let temp = TempDir::new().expect("temp dir");
        let backend = JsonFileBackend::new(temp.path().join("nested"), "students").unwrap();
        backend.write("[]").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("[]"));
        assert!(!tmp_path(backend.path()).exists());
    }

    #[test]
    fn keys_are_sanitized_into_file_names() {
        assert_eq!(canonical_key("students"), "students");
        assert_eq!(canonical_key("group 1/a"), "group_1_a");
        assert_eq!(canonical_key("  "), "students");
        assert_eq!(canonical_key("../"), "students");
    }
}
