//! Presentation helpers: numeral agreement, durations and money amounts.

pub mod duration;
pub mod money;
pub mod plural;

pub use duration::{format_months, format_months_in, Language};
pub use money::{format_amount, format_input_amount, format_money};
pub use plural::{pluralize, PluralCategory, PluralForms};
