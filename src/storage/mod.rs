pub mod json_backend;
pub mod memory;
pub mod snapshot;

use crate::core::errors::BudgetError;

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Key under which the budget snapshot is stored.
pub const SNAPSHOT_KEY: &str = "dream_calc";

/// Minimal key-value persistence: each key holds one serialized record.
pub trait StorageBackend {
    /// Returns the raw record for `key`, or `None` when nothing was stored yet.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
pub use snapshot::{decode_snapshot, encode_snapshot, LoadReport};
