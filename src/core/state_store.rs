use tracing::{debug, info, warn};

use crate::core::errors::Result;
use crate::ledger::{BudgetState, Category, CategoryId, Goal};
use crate::storage::{decode_snapshot, encode_snapshot, LoadReport, StorageBackend, SNAPSHOT_KEY};

/// Owns the canonical budget state and keeps the stored snapshot in step with it.
///
/// Mutators are crate-private: outside code changes the budget through
/// [`crate::validation::FieldValidationEngine`], which validates first.
pub struct PersistedStateStore {
    state: BudgetState,
    storage: Box<dyn StorageBackend>,
}

impl PersistedStateStore {
    /// Wraps `storage` and loads whatever snapshot it holds.
    pub fn open(storage: Box<dyn StorageBackend>) -> (Self, LoadReport) {
        let mut store = Self {
            state: BudgetState::default(),
            storage,
        };
        let report = store.load();
        store.state = report.state.clone();
        (store, report)
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Reads the stored snapshot without touching the in-memory state.
    ///
    /// Never fails: unreadable storage or corrupt data fall back to defaults,
    /// field by field, and are reported as warnings.
    pub fn load(&self) -> LoadReport {
        let raw = match self.storage.read(SNAPSHOT_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "budget snapshot unreadable; starting from defaults");
                return LoadReport {
                    state: BudgetState::default(),
                    warnings: vec![format!("snapshot unreadable: {err}")],
                };
            }
        };
        let report = decode_snapshot(raw.as_deref());
        for warning in &report.warnings {
            warn!(%warning, "recovered from malformed budget snapshot");
        }
        info!(
            categories = report.state.categories.len(),
            recovered = !report.is_clean(),
            "budget snapshot loaded"
        );
        report
    }

    /// Writes the full state as one record. Failures propagate to the caller.
    pub fn save(&self) -> Result<()> {
        let json = encode_snapshot(&self.state)?;
        self.storage.write(SNAPSHOT_KEY, &json)?;
        debug!(bytes = json.len(), "budget snapshot saved");
        Ok(())
    }

    /// Drops all data and persists the empty state.
    pub(crate) fn reset(&mut self) -> Result<()> {
        self.state = BudgetState::default();
        info!("budget reset to defaults");
        self.save()
    }

    pub(crate) fn set_income(&mut self, income: f64) -> Result<()> {
        self.state.income = income;
        self.save()
    }

    pub(crate) fn add_category(&mut self, category: Category) -> Result<()> {
        self.state.push_category(category);
        self.save()
    }

    pub(crate) fn remove_category(&mut self, id: &CategoryId) -> Result<Option<Category>> {
        let removed = self.state.remove_category(id);
        if removed.is_some() {
            self.save()?;
        }
        Ok(removed)
    }

    pub(crate) fn set_goal(&mut self, goal: Goal) -> Result<()> {
        self.state.goal = goal;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Period;
    use crate::storage::MemoryStorage;

    fn open_memory() -> (PersistedStateStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let (store, _) = PersistedStateStore::open(Box::new(storage.clone()));
        (store, storage)
    }

    #[test]
    fn fresh_storage_opens_with_defaults() {
        let (store, storage) = open_memory();
        assert_eq!(store.state(), &BudgetState::default());
        assert_eq!(storage.raw(SNAPSHOT_KEY), None);
    }

    #[test]
    fn every_mutation_writes_the_whole_state() {
        let (mut store, storage) = open_memory();
        store.set_income(60000.0).unwrap();
        store
            .add_category(Category::new("Rent", 20000.0, Period::Month))
            .unwrap();
        store.set_goal(Goal::new("Japan", 200000.0)).unwrap();

        let raw = storage.raw(SNAPSHOT_KEY).expect("snapshot written");
        let stored: BudgetState = serde_json::from_str(&raw).unwrap();
        assert_eq!(&stored, store.state());
    }

    #[test]
    fn removing_unknown_id_does_not_save() {
        let (mut store, storage) = open_memory();
        let removed = store.remove_category(&CategoryId::from("missing")).unwrap();
        assert!(removed.is_none());
        assert_eq!(storage.raw(SNAPSHOT_KEY), None);
    }

    #[test]
    fn save_failure_propagates_after_in_memory_change() {
        let (mut store, storage) = open_memory();
        storage.lock_key(SNAPSHOT_KEY);
        assert!(store.set_income(100.0).is_err());
        assert_eq!(store.state().income, 100.0);
    }

    #[test]
    fn reopening_restores_saved_state() {
        let (mut store, storage) = open_memory();
        store
            .add_category(Category::new("Coffee", 150.0, Period::Day))
            .unwrap();
        let (reopened, report) = PersistedStateStore::open(Box::new(storage));
        assert!(report.is_clean());
        assert_eq!(reopened.state(), store.state());
    }
}
