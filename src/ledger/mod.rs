//! Budget domain models: the persisted state, spending categories and billing periods.

pub mod category;
pub mod period;
pub mod state;

pub use category::{Category, CategoryId};
pub use period::{normalize_raw, normalize_to_month, ParsePeriodError, Period};
pub use state::{BudgetState, Goal};
