use std::fmt;

pub const INCOME_MISSING: &str = "enter income amount";
pub const INCOME_INVALID: &str = "enter a valid number (0 or greater)";
pub const CATEGORY_NAME_MISSING: &str = "enter a category name";
pub const CATEGORY_AMOUNT_MISSING: &str = "enter an amount";
pub const GOAL_NAME_MISSING: &str = "enter a goal name";
pub const GOAL_AMOUNT_MISSING: &str = "enter a goal amount";
pub const AMOUNT_NOT_POSITIVE: &str = "amount must be greater than zero";

pub const INCOME_SAVED: &str = "income saved";
pub const CATEGORY_ADDED: &str = "category added";
pub const GOAL_SAVED: &str = "goal saved";

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Value produced by a successful validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Accepted {
    Text(String),
    Amount(f64),
}

impl Accepted {
    pub fn into_text(self) -> String {
        match self {
            Accepted::Text(text) => text,
            Accepted::Amount(amount) => amount.to_string(),
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            Accepted::Amount(amount) => *amount,
            Accepted::Text(_) => 0.0,
        }
    }
}

/// Built-in validation rules, each carrying the messages it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Trimmed text must not be empty.
    NonEmpty { missing: &'static str },
    /// A number that is zero or more.
    NonNegativeAmount {
        missing: &'static str,
        invalid: &'static str,
    },
    /// A number strictly greater than zero.
    PositiveAmount {
        missing: &'static str,
        invalid: &'static str,
    },
}

impl Validator {
    pub fn validate(&self, input: &str) -> Result<Accepted, ValidationError> {
        let trimmed = input.trim();
        match *self {
            Validator::NonEmpty { missing } => {
                if trimmed.is_empty() {
                    Err(ValidationError::new(missing))
                } else {
                    Ok(Accepted::Text(trimmed.to_string()))
                }
            }
            Validator::NonNegativeAmount { missing, invalid } => {
                if trimmed.is_empty() {
                    return Err(ValidationError::new(missing));
                }
                parse_amount(trimmed)
                    .filter(|value| *value >= 0.0)
                    .map(|value| Accepted::Amount(value + 0.0))
                    .ok_or_else(|| ValidationError::new(invalid))
            }
            Validator::PositiveAmount { missing, invalid } => {
                if trimmed.is_empty() {
                    return Err(ValidationError::new(missing));
                }
                parse_amount(trimmed)
                    .filter(|value| *value > 0.0)
                    .map(Accepted::Amount)
                    .ok_or_else(|| ValidationError::new(invalid))
            }
        }
    }
}

/// Parses a user-typed amount.
///
/// Grouping whitespace is ignored and a comma works as the decimal separator,
/// so `"75 000"` and `"12,5"` are accepted. Infinite or NaN values are not.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCOME: Validator = Validator::NonNegativeAmount {
        missing: INCOME_MISSING,
        invalid: INCOME_INVALID,
    };
    const AMOUNT: Validator = Validator::PositiveAmount {
        missing: CATEGORY_AMOUNT_MISSING,
        invalid: AMOUNT_NOT_POSITIVE,
    };

    #[test]
    fn parse_amount_accepts_grouping_and_comma() {
        assert_eq!(parse_amount("75 000"), Some(75000.0));
        assert_eq!(parse_amount("12,5"), Some(12.5));
        assert_eq!(parse_amount("\u{a0}300\u{a0}"), Some(300.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn non_empty_trims() {
        let rule = Validator::NonEmpty {
            missing: CATEGORY_NAME_MISSING,
        };
        assert_eq!(
            rule.validate("  Food "),
            Ok(Accepted::Text("Food".into()))
        );
        assert_eq!(
            rule.validate("   "),
            Err(ValidationError::new(CATEGORY_NAME_MISSING))
        );
    }

    #[test]
    fn income_allows_zero_but_not_negative() {
        assert_eq!(INCOME.validate("0"), Ok(Accepted::Amount(0.0)));
        assert_eq!(INCOME.validate(""), Err(ValidationError::new(INCOME_MISSING)));
        assert_eq!(
            INCOME.validate("-100"),
            Err(ValidationError::new(INCOME_INVALID))
        );
        assert_eq!(
            INCOME.validate("lots"),
            Err(ValidationError::new(INCOME_INVALID))
        );
    }

    #[test]
    fn positive_amount_rejects_zero() {
        assert_eq!(AMOUNT.validate("3000"), Ok(Accepted::Amount(3000.0)));
        assert_eq!(
            AMOUNT.validate("0"),
            Err(ValidationError::new(AMOUNT_NOT_POSITIVE))
        );
        assert_eq!(
            AMOUNT.validate(" "),
            Err(ValidationError::new(CATEGORY_AMOUNT_MISSING))
        );
    }
}
