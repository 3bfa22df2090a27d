//! Validates raw field input and gates every change to the budget.
//!
//! Each submission validates all fields of its form together, so several
//! fields can fail at once. Nothing reaches the store unless the whole form
//! passes; a commit always saves and returns a fresh projection.

use tracing::debug;

use crate::core::errors::Result;
use crate::core::services::{BudgetProjection, SummaryService};
use crate::core::state_store::PersistedStateStore;
use crate::format::format_input_amount;
use crate::ledger::{BudgetState, Category, CategoryId, Goal, Period};

use super::feedback::{Field, FieldFeedback};
use super::validators::{
    Accepted, ValidationError, Validator, AMOUNT_NOT_POSITIVE, CATEGORY_ADDED,
    CATEGORY_AMOUNT_MISSING, CATEGORY_NAME_MISSING, GOAL_AMOUNT_MISSING, GOAL_NAME_MISSING,
    GOAL_SAVED, INCOME_INVALID, INCOME_MISSING, INCOME_SAVED,
};

/// Result of one submit or delete action.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub committed: bool,
    /// Recomputed after a commit; `None` when nothing changed.
    pub projection: Option<BudgetProjection>,
}

impl Submission {
    fn rejected() -> Self {
        Self {
            committed: false,
            projection: None,
        }
    }

    fn committed(state: &BudgetState) -> Self {
        Self {
            committed: true,
            projection: Some(SummaryService::project(state)),
        }
    }
}

/// Holds the raw text of every field plus its feedback.
#[derive(Debug, Clone)]
pub struct FieldValidationEngine {
    inputs: [String; 5],
    feedback: [FieldFeedback; 5],
    period: Period,
}

impl Default for FieldValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidationEngine {
    pub fn new() -> Self {
        Self {
            inputs: Default::default(),
            feedback: Default::default(),
            period: Period::default(),
        }
    }

    /// Starts with inputs showing what is already saved: income when positive,
    /// goal fields when filled in.
    pub fn from_state(state: &BudgetState) -> Self {
        let mut engine = Self::new();
        if state.income > 0.0 {
            engine.input(Field::Income, format_input_amount(state.income));
        }
        if !state.goal.name.is_empty() {
            engine.input(Field::GoalName, state.goal.name.clone());
        }
        if state.goal.amount > 0.0 {
            engine.input(Field::GoalAmount, format_input_amount(state.goal.amount));
        }
        engine
    }

    pub fn rule(field: Field) -> Validator {
        match field {
            Field::Income => Validator::NonNegativeAmount {
                missing: INCOME_MISSING,
                invalid: INCOME_INVALID,
            },
            Field::CategoryName => Validator::NonEmpty {
                missing: CATEGORY_NAME_MISSING,
            },
            Field::CategoryAmount => Validator::PositiveAmount {
                missing: CATEGORY_AMOUNT_MISSING,
                invalid: AMOUNT_NOT_POSITIVE,
            },
            Field::GoalName => Validator::NonEmpty {
                missing: GOAL_NAME_MISSING,
            },
            Field::GoalAmount => Validator::PositiveAmount {
                missing: GOAL_AMOUNT_MISSING,
                invalid: AMOUNT_NOT_POSITIVE,
            },
        }
    }

    /// Replaces the raw text of `field`.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.inputs[field.index()] = value.into();
    }

    pub fn input_value(&self, field: Field) -> &str {
        &self.inputs[field.index()]
    }

    pub fn select_period(&mut self, period: Period) {
        self.period = period;
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn feedback(&self, field: Field) -> &FieldFeedback {
        &self.feedback[field.index()]
    }

    /// Focusing a field clears its feedback whatever it was.
    pub fn focus(&mut self, field: Field) {
        self.set_feedback(field, FieldFeedback::Neutral);
    }

    pub fn submit_income(&mut self, store: &mut PersistedStateStore) -> Result<Submission> {
        let Some([income]) = self.validate_form([Field::Income]) else {
            return Ok(Submission::rejected());
        };
        let income = income.amount();
        store.set_income(income)?;

        self.input(Field::Income, format_input_amount(income));
        self.set_feedback(Field::Income, FieldFeedback::Success(INCOME_SAVED.into()));
        debug!(income, "income committed");
        Ok(Submission::committed(store.state()))
    }

    /// Adds a category from the name/amount inputs and the selected period.
    ///
    /// Submitting the same values twice adds two categories with distinct ids.
    pub fn submit_category(&mut self, store: &mut PersistedStateStore) -> Result<Submission> {
        let Some([name, amount]) = self.validate_form([Field::CategoryName, Field::CategoryAmount])
        else {
            return Ok(Submission::rejected());
        };
        let category = Category::new(name.into_text(), amount.amount(), self.period.clone());
        let id = category.id.clone();
        store.add_category(category)?;

        for field in [Field::CategoryName, Field::CategoryAmount] {
            self.input(field, String::new());
            self.set_feedback(field, FieldFeedback::Success(CATEGORY_ADDED.into()));
        }
        debug!(%id, period = %self.period, "category committed");
        Ok(Submission::committed(store.state()))
    }

    pub fn submit_goal(&mut self, store: &mut PersistedStateStore) -> Result<Submission> {
        let Some([name, amount]) = self.validate_form([Field::GoalName, Field::GoalAmount]) else {
            return Ok(Submission::rejected());
        };
        let goal = Goal::new(name.into_text(), amount.amount());
        store.set_goal(goal.clone())?;

        self.input(Field::GoalName, goal.name);
        self.input(Field::GoalAmount, format_input_amount(goal.amount));
        for field in [Field::GoalName, Field::GoalAmount] {
            self.set_feedback(field, FieldFeedback::Success(GOAL_SAVED.into()));
        }
        debug!(amount = goal.amount, "goal committed");
        Ok(Submission::committed(store.state()))
    }

    /// Removes a category by id; unknown ids change nothing.
    pub fn delete_category(
        &mut self,
        store: &mut PersistedStateStore,
        id: &CategoryId,
    ) -> Result<Submission> {
        match store.remove_category(id)? {
            Some(_) => {
                debug!(%id, "category removed");
                Ok(Submission::committed(store.state()))
            }
            None => Ok(Submission::rejected()),
        }
    }

    /// Clears the budget and every input, then persists the empty state.
    pub fn reset(&mut self, store: &mut PersistedStateStore) -> Result<Submission> {
        store.reset()?;
        let period = self.period.clone();
        *self = Self::new();
        self.period = period;
        Ok(Submission::committed(store.state()))
    }

    /// Validates every field of a form and records an error on each failing one.
    ///
    /// Passing fields keep whatever feedback they had; only focus or a commit
    /// changes it. Returns the accepted values only when all fields pass.
    fn validate_form<const N: usize>(&mut self, fields: [Field; N]) -> Option<[Accepted; N]> {
        let outcomes: [std::result::Result<Accepted, ValidationError>; N] =
            fields.map(|field| Self::rule(field).validate(self.input_value(field)));

        let mut valid = true;
        for (field, outcome) in fields.iter().zip(outcomes.iter()) {
            if let Err(err) = outcome {
                valid = false;
                debug!(field = %field, reason = %err, "field rejected");
                self.set_feedback(*field, FieldFeedback::Error(err.message.clone()));
            }
        }
        if !valid {
            return None;
        }
        let accepted: Vec<Accepted> = outcomes
            .into_iter()
            .map(|outcome| outcome.ok())
            .collect::<Option<_>>()?;
        accepted.try_into().ok()
    }

    fn set_feedback(&mut self, field: Field, feedback: FieldFeedback) {
        self.feedback[field.index()] = feedback;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn setup() -> (FieldValidationEngine, PersistedStateStore) {
        let (store, _) = PersistedStateStore::open(Box::new(MemoryStorage::new()));
        (FieldValidationEngine::new(), store)
    }

    #[test]
    fn income_commit_keeps_accepted_value_in_input() {
        let (mut engine, mut store) = setup();
        engine.input(Field::Income, " 75 000 ");
        let submission = engine.submit_income(&mut store).unwrap();
        assert!(submission.committed);
        assert_eq!(store.state().income, 75000.0);
        assert_eq!(engine.input_value(Field::Income), "75000");
        assert_eq!(
            engine.feedback(Field::Income),
            &FieldFeedback::Success(INCOME_SAVED.into())
        );
    }

    #[test]
    fn error_replaced_by_success_on_valid_resubmit() {
        let (mut engine, mut store) = setup();
        engine.input(Field::Income, "-1");
        engine.submit_income(&mut store).unwrap();
        assert!(engine.feedback(Field::Income).is_error());

        engine.input(Field::Income, "10");
        engine.submit_income(&mut store).unwrap();
        assert!(engine.feedback(Field::Income).is_success());
        assert!(!engine.feedback(Field::Income).is_error());
    }

    #[test]
    fn failing_sibling_leaves_passing_field_untouched() {
        let (mut engine, mut store) = setup();
        engine.input(Field::CategoryName, "Food");
        engine.input(Field::CategoryAmount, "0");
        let submission = engine.submit_category(&mut store).unwrap();
        assert!(!submission.committed);
        assert!(engine.feedback(Field::CategoryName).is_neutral());
        assert_eq!(
            engine.feedback(Field::CategoryAmount),
            &FieldFeedback::Error(AMOUNT_NOT_POSITIVE.into())
        );
        assert_eq!(engine.input_value(Field::CategoryName), "Food");
    }

    #[test]
    fn failed_resubmit_keeps_earlier_success_on_valid_field() {
        let (mut engine, mut store) = setup();
        engine.input(Field::GoalName, "Boat");
        engine.input(Field::GoalAmount, "50000");
        assert!(engine.submit_goal(&mut store).unwrap().committed);

        engine.input(Field::GoalAmount, "0");
        assert!(!engine.submit_goal(&mut store).unwrap().committed);
        assert_eq!(
            engine.feedback(Field::GoalName),
            &FieldFeedback::Success(GOAL_SAVED.into())
        );
        assert!(engine.feedback(Field::GoalAmount).is_error());
        assert_eq!(store.state().goal.amount, 50000.0);
    }

    #[test]
    fn failed_resubmit_keeps_earlier_error_on_now_valid_field() {
        let (mut engine, mut store) = setup();
        engine.submit_category(&mut store).unwrap();
        assert!(engine.feedback(Field::CategoryName).is_error());

        engine.input(Field::CategoryName, "Rent");
        engine.submit_category(&mut store).unwrap();
        assert_eq!(
            engine.feedback(Field::CategoryName),
            &FieldFeedback::Error(CATEGORY_NAME_MISSING.into())
        );

        engine.focus(Field::CategoryName);
        assert!(engine.feedback(Field::CategoryName).is_neutral());
    }

    #[test]
    fn reset_clears_inputs_but_keeps_period() {
        let (mut engine, mut store) = setup();
        engine.select_period(Period::Week);
        engine.input(Field::Income, "100");
        engine.submit_income(&mut store).unwrap();

        engine.reset(&mut store).unwrap();
        assert_eq!(store.state(), &BudgetState::default());
        assert_eq!(engine.input_value(Field::Income), "");
        assert!(engine.feedback(Field::Income).is_neutral());
        assert_eq!(engine.period(), &Period::Week);
    }

    #[test]
    fn from_state_prefills_saved_values() {
        let state = BudgetState {
            income: 60000.0,
            categories: Vec::new(),
            goal: Goal::new("Japan", 200000.0),
        };
        let engine = FieldValidationEngine::from_state(&state);
        assert_eq!(engine.input_value(Field::Income), "60000");
        assert_eq!(engine.input_value(Field::GoalName), "Japan");
        assert_eq!(engine.input_value(Field::GoalAmount), "200000");
        assert_eq!(engine.input_value(Field::CategoryName), "");
    }
}
