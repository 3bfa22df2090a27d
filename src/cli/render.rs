//! Text views of the budget for the shell.

use crate::config::Config;
use crate::core::services::{BudgetProjection, SummaryService};
use crate::format::{format_amount, format_money};
use crate::ledger::{BudgetState, Category};
use crate::validation::{Field, FieldFeedback, FieldValidationEngine};

const BAR_WIDTH: usize = 20;

/// Characters of a category id shown in listings.
pub(crate) const SHORT_ID_LEN: usize = 8;

/// Lines of the budget overview; expenses, savings and goal progress.
pub fn summary_lines(state: &BudgetState, config: &Config) -> Vec<String> {
    let projection = SummaryService::project_in(state, config.language);
    let money = |amount: f64| format_money(amount, &config.currency_symbol);

    if projection.is_empty() {
        return vec!["Nothing planned yet. Start with `income <amount>`.".into()];
    }

    let mut lines = vec![
        format!("Income per month : {}", money(projection.income)),
        format!(
            "Expenses         : {}",
            money(projection.totals.total_expenses)
        ),
        format!("Savings          : {}", money(projection.totals.savings)),
    ];

    if let Some(overspend) = projection.overspend() {
        lines.push(format!(
            "Spending exceeds income by {} per month.",
            money(overspend)
        ));
    }

    if projection.goal_set {
        lines.push(format!(
            "Goal             : {} ({})",
            state.goal.name,
            money(state.goal.amount)
        ));
        lines.push(goal_line(&projection));
        if projection.totals.savings > 0.0 {
            let share = expense_share(&projection);
            lines.push(format!(
                "Spent / saved    : {} {:.0}% spent",
                bar(share),
                share * 100.0
            ));
        }
    }
    lines
}

fn goal_line(projection: &BudgetProjection) -> String {
    match &projection.duration {
        Some(duration) => format!("Time to goal     : {duration}"),
        None if !projection.has_income => "Time to goal     : add your income first".into(),
        None => "Time to goal     : not reachable without savings".into(),
    }
}

/// Fraction of income that goes to expenses, clamped to `0..=1`.
fn expense_share(projection: &BudgetProjection) -> f64 {
    if projection.income <= 0.0 {
        return 1.0;
    }
    (projection.totals.total_expenses / projection.income).clamp(0.0, 1.0)
}

fn bar(share: f64) -> String {
    let filled = (share * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

/// One numbered line per category.
pub fn category_lines(categories: &[Category], config: &Config) -> Vec<String> {
    categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            format!(
                "{:>3}. {:<20} {:>12} {:<10} = {} / month  [{}]",
                index + 1,
                category.name,
                format_amount(category.amount),
                category.period.label(),
                format_money(category.monthly_amount(), &config.currency_symbol),
                short_id(category.id.as_str())
            )
        })
        .collect()
}

pub fn feedback_lines(engine: &FieldValidationEngine) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|field| {
            let status = match engine.feedback(*field) {
                FieldFeedback::Neutral => "-".to_string(),
                FieldFeedback::Error(message) => format!("error: {message}"),
                FieldFeedback::Success(message) => format!("ok: {message}"),
            };
            format!(
                "{:<16} {:<14} {}",
                field.key(),
                format!("\"{}\"", engine.input_value(*field)),
                status
            )
        })
        .collect()
}

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}
