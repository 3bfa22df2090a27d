//! Encoding and tolerant decoding of the budget snapshot.
//!
//! Decoding never fails. Each top-level field is checked on its own; a field
//! that does not type-check falls back to its default while the others are
//! still taken from the snapshot. Every fallback leaves a warning behind.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::ledger::{BudgetState, Category, CategoryId, Goal, Period};

use super::Result;

/// Outcome of reading a snapshot: the recovered state plus any diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub state: BudgetState,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Serializes the whole state as one record.
pub fn encode_snapshot(state: &BudgetState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Rebuilds a state from a raw record, recovering whatever type-checks.
pub fn decode_snapshot(raw: Option<&str>) -> LoadReport {
    let mut report = LoadReport::default();
    let Some(raw) = raw else {
        return report;
    };

    let root = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(root)) => root,
        Ok(other) => {
            report.warnings.push(format!(
                "snapshot is {} rather than an object; using defaults",
                kind_of(&other)
            ));
            return report;
        }
        Err(err) => {
            report
                .warnings
                .push(format!("snapshot is not valid JSON ({err}); using defaults"));
            return report;
        }
    };

    report.state.income = decode_income(&root, &mut report.warnings);
    report.state.categories = decode_categories(&root, &mut report.warnings);
    report.state.goal = decode_goal(&root, &mut report.warnings);
    report
}

fn decode_income(root: &Map<String, Value>, warnings: &mut Vec<String>) -> f64 {
    match root.get("income") {
        None => 0.0,
        Some(value) => match non_negative_number(value) {
            Some(income) => income,
            None => {
                warnings.push(format!(
                    "income: expected a non-negative number, found {}; using 0",
                    kind_of(value)
                ));
                0.0
            }
        },
    }
}

fn decode_categories(root: &Map<String, Value>, warnings: &mut Vec<String>) -> Vec<Category> {
    let entries = match root.get("categories") {
        None => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            warnings.push(format!(
                "categories: expected a list, found {}; starting empty",
                kind_of(other)
            ));
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match decode_category(index, entry, warnings) {
            Ok(category) => {
                if seen.insert(category.id.clone()) {
                    categories.push(category);
                } else {
                    warnings.push(format!(
                        "categories[{index}]: duplicate id `{}` dropped",
                        category.id
                    ));
                }
            }
            Err(reason) => warnings.push(format!("categories[{index}]: {reason}; dropped")),
        }
    }
    categories
}

/// Rejects entries without a usable id, name or amount. A bad period keeps the
/// entry as `Period::Unknown` holding the raw JSON text.
fn decode_category(
    index: usize,
    entry: &Value,
    warnings: &mut Vec<String>,
) -> std::result::Result<Category, String> {
    let Value::Object(fields) = entry else {
        return Err(format!("expected an object, found {}", kind_of(entry)));
    };

    let id = match fields.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => CategoryId::from(id.as_str()),
        Some(Value::Number(id)) => CategoryId::from(id.to_string()),
        _ => return Err("missing id".into()),
    };
    let name = match fields.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => return Err("missing name".into()),
    };
    let amount = match fields.get("amount").and_then(Value::as_f64) {
        Some(amount) if amount.is_finite() && amount > 0.0 => amount,
        _ => return Err("amount must be a positive number".into()),
    };
    let period = match fields.get("period") {
        Some(Value::String(period)) => Period::from(period.clone()),
        Some(other) => {
            warnings.push(format!(
                "categories[{index}].period: expected text, found {}; kept as unknown",
                kind_of(other)
            ));
            Period::Unknown(other.to_string())
        }
        None => {
            warnings.push(format!("categories[{index}].period: missing; kept as unknown"));
            Period::Unknown(String::new())
        }
    };

    Ok(Category {
        id,
        name,
        amount,
        period,
    })
}

fn decode_goal(root: &Map<String, Value>, warnings: &mut Vec<String>) -> Goal {
    let fields = match root.get("goal") {
        None | Some(Value::Null) => return Goal::default(),
        Some(Value::Object(fields)) => fields,
        Some(other) => {
            warnings.push(format!(
                "goal: expected an object, found {}; clearing goal",
                kind_of(other)
            ));
            return Goal::default();
        }
    };

    let name = match fields.get("name") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            warnings.push(format!("goal.name: expected text, found {}", kind_of(other)));
            String::new()
        }
    };
    let amount = match fields.get("amount") {
        None | Some(Value::Null) => 0.0,
        Some(value) => non_negative_number(value).unwrap_or_else(|| {
            warnings.push(format!(
                "goal.amount: expected a non-negative number, found {}",
                kind_of(value)
            ));
            0.0
        }),
    };
    Goal { name, amount }
}

fn non_negative_number(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .filter(|number| number.is_finite() && *number >= 0.0)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
