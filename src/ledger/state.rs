use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryId};

/// Savings target the user is working towards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub amount: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// A goal only counts once both its name and a positive amount are present.
    pub fn is_set(&self) -> bool {
        !self.name.trim().is_empty() && self.amount > 0.0
    }
}

/// Everything the user has entered; persisted as one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    pub income: f64,
    pub categories: Vec<Category>,
    pub goal: Goal,
}

impl BudgetState {
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }

    pub fn has_income(&self) -> bool {
        self.income > 0.0
    }

    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Nothing entered yet: no income, no categories and no complete goal.
    pub fn is_blank(&self) -> bool {
        !self.has_income() && !self.has_categories() && !self.goal.is_set()
    }

    pub(crate) fn push_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub(crate) fn remove_category(&mut self, id: &CategoryId) -> Option<Category> {
        let index = self
            .categories
            .iter()
            .position(|category| &category.id == id)?;
        Some(self.categories.remove(index))
    }
}
