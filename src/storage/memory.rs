use std::{
    cell::RefCell,
    collections::{BTreeSet, HashMap},
    rc::Rc,
};

use crate::core::errors::BudgetError;

use super::{Result, StorageBackend};

/// In-process key-value store.
///
/// Clones share the same records, so a test can hand one clone to the budget
/// store and inspect or tamper with the raw data through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later write to `key` fail, mimicking a full or locked store.
    pub fn lock_key(&self, key: &str) {
        self.read_only.borrow_mut().insert(key.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only.borrow().contains(key) {
            return Err(BudgetError::StorageError(format!(
                "record `{}` is not writable",
                key
            )));
        }
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}
