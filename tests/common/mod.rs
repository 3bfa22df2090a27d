#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use dream_calc::{
    config::ConfigManager, core::PersistedStateStore, storage::JsonStorage,
    validation::FieldValidationEngine,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh data directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn json_storage(base: &PathBuf) -> JsonStorage {
    JsonStorage::new(Some(base.clone())).expect("create json storage backend")
}

/// Store, engine and config manager over one isolated directory.
pub fn setup_test_env() -> (PersistedStateStore, FieldValidationEngine, ConfigManager, PathBuf) {
    let base = temp_base();
    let storage = json_storage(&base);
    let (store, report) = PersistedStateStore::open(Box::new(storage.clone()));
    assert!(report.is_clean(), "fresh directory should load cleanly");
    let engine = FieldValidationEngine::from_state(store.state());
    let config = ConfigManager::new(Box::new(storage));
    (store, engine, config, base)
}
