#![doc(test(attr(deny(warnings))))]

//! Dream Calc plans a monthly budget: income, recurring expense categories
//! and a savings goal, with a projection of how long the goal takes to reach.
//!
//! Budget changes go through [`validation::FieldValidationEngine`], which
//! validates raw field input and persists accepted changes through
//! [`core::PersistedStateStore`].

pub mod cli;
pub mod config;
pub mod core;
pub mod format;
pub mod ledger;
pub mod storage;
pub mod utils;
pub mod validation;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("dream calc tracing initialized");
    });
}
