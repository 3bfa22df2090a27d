use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::core::utils::{ensure_dir, PathResolver};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores every key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, key: &str) -> PathBuf {
        PathResolver::record_file_in(&self.root, key)
    }
}

impl StorageBackend for JsonStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
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

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn missing_key_reads_as_none() {
        let (storage, _guard) = storage_with_temp_dir();
        assert_eq!(storage.read("dream_calc").expect("read"), None);
    }

    #[test]
    fn write_then_read_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.write("theme", "\"dark\"").expect("write");
        assert_eq!(
            storage.read("theme").expect("read").as_deref(),
            Some("\"dark\"")
        );
        assert!(!tmp_path(&storage.record_path("theme")).exists());
    }

    #[test]
    fn failed_write_keeps_previous_record() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.write("dream_calc", "{\"income\":1}").expect("write");

        // A directory in place of the staging file makes File::create fail.
        let tmp = tmp_path(&storage.record_path("dream_calc"));
        fs::create_dir_all(&tmp).unwrap();

        assert!(storage.write("dream_calc", "{\"income\":2}").is_err());
        assert_eq!(
            storage.read("dream_calc").expect("read").as_deref(),
            Some("{\"income\":1}")
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.write("theme", "\"light\"").expect("write");
        storage.remove("theme").expect("remove");
        storage.remove("theme").expect("remove again");
        assert_eq!(storage.read("theme").expect("read"), None);
    }
}
