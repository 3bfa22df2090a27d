pub mod summary_service;

pub use summary_service::{
    calc_months_to_goal, calc_totals, BudgetProjection, SummaryService, Totals,
};
