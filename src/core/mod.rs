pub mod errors;
pub mod services;
pub mod state_store;
pub mod utils;

pub use errors::{BudgetError, CliError};
pub use state_store::PersistedStateStore;
