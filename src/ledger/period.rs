use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Days counted per month when normalizing daily spending.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Weeks counted per month when normalizing weekly spending.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Billing period attached to a spending category.
///
/// `Unknown` only comes out of persisted snapshots written by other versions;
/// the raw name is kept so saving the state again does not rewrite it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Period {
    Day,
    Week,
    Month,
    Unknown(String),
}

impl Period {
    /// Periods a user can pick when adding a category.
    pub const SELECTABLE: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    pub fn as_str(&self) -> &str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Period::Unknown(_))
    }

    /// Display label used next to category amounts.
    pub fn label(&self) -> String {
        match self {
            Period::Unknown(raw) => format!("per {raw} (ignored)"),
            known => format!("per {}", known.as_str()),
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Month
    }
}

impl From<String> for Period {
    fn from(value: String) -> Self {
        match value.as_str() {
            "day" => Period::Day,
            "week" => Period::Week,
            "month" => Period::Month,
            _ => Period::Unknown(value),
        }
    }
}

impl From<Period> for String {
    fn from(value: Period) -> Self {
        match value {
            Period::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Error returned when a user-facing period choice is not one of the selectable periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePeriodError(pub String);

impl fmt::Display for ParsePeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown period `{}` (use day, week or month)", self.0)
    }
}

impl std::error::Error for ParsePeriodError {}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Period::from(s.trim().to_ascii_lowercase()) {
            Period::Unknown(_) => Err(ParsePeriodError(s.trim().to_string())),
            known => Ok(known),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts an amount billed every `period` into its monthly equivalent.
///
/// A month is a fixed 30 days or 4 weeks. This is an approximation on purpose;
/// no calendar arithmetic is involved. Unknown periods contribute nothing.
pub fn normalize_to_month(amount: f64, period: &Period) -> f64 {
    match period {
        Period::Day => amount * DAYS_PER_MONTH,
        Period::Week => amount * WEEKS_PER_MONTH,
        Period::Month => amount,
        Period::Unknown(_) => 0.0,
    }
}

/// Same as [`normalize_to_month`] but keyed on a raw period name.
pub fn normalize_raw(amount: f64, period: &str) -> f64 {
    normalize_to_month(amount, &Period::from(period.to_string()))
}
