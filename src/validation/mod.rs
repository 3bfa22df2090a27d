//! Field validation and the feedback state machine that gates budget changes.

pub mod engine;
pub mod feedback;
pub mod validators;

pub use engine::{FieldValidationEngine, Submission};
pub use feedback::{Field, FieldFeedback};
pub use validators::{parse_amount, Accepted, ValidationError, Validator};
