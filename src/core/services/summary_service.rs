use crate::format::{format_months_in, Language};
use crate::ledger::{normalize_to_month, BudgetState, Category};

/// Monthly cash flow derived from income and categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub total_expenses: f64,
    /// Income minus expenses; negative when spending exceeds income.
    pub savings: f64,
}

/// Everything a renderer needs to present the current budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProjection {
    pub income: f64,
    pub totals: Totals,
    pub has_income: bool,
    pub has_categories: bool,
    pub goal_set: bool,
    pub months_to_goal: Option<u64>,
    pub duration: Option<String>,
}

impl BudgetProjection {
    /// Nothing to show yet.
    pub fn is_empty(&self) -> bool {
        !self.has_income && !self.has_categories && !self.goal_set
    }

    /// Amount by which monthly expenses exceed income.
    pub fn overspend(&self) -> Option<f64> {
        (self.totals.savings < 0.0).then(|| -self.totals.savings)
    }
}

/// Sums the monthly equivalent of every category; order does not matter.
pub fn calc_totals(categories: &[Category], income: f64) -> Totals {
    let total_expenses = categories
        .iter()
        .map(|category| normalize_to_month(category.amount, &category.period))
        .sum::<f64>();
    Totals {
        total_expenses,
        savings: income - total_expenses,
    }
}

/// Months needed to save `goal_amount`, counting a partial last month as a whole one.
///
/// `None` when nothing is being saved or the goal has no positive amount.
pub fn calc_months_to_goal(savings: f64, goal_amount: f64) -> Option<u64> {
    if !(savings > 0.0) || !(goal_amount > 0.0) {
        return None;
    }
    let months = (goal_amount / savings).ceil();
    if months.is_finite() {
        Some(months as u64)
    } else {
        Some(u64::MAX)
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals(state: &BudgetState) -> Totals {
        calc_totals(&state.categories, state.income)
    }

    /// Derives totals and the goal projection with an English duration label.
    pub fn project(state: &BudgetState) -> BudgetProjection {
        Self::project_in(state, Language::En)
    }

    pub fn project_in(state: &BudgetState, language: Language) -> BudgetProjection {
        let totals = Self::totals(state);
        let goal_set = state.goal.is_set();
        let months_to_goal = if goal_set {
            calc_months_to_goal(totals.savings, state.goal.amount)
        } else {
            None
        };
        BudgetProjection {
            income: state.income,
            totals,
            has_income: state.has_income(),
            has_categories: state.has_categories(),
            goal_set,
            months_to_goal,
            duration: months_to_goal.map(|months| format_months_in(months, language)),
        }
    }
}
