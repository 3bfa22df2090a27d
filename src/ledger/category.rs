use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::period::{normalize_to_month, Period};

/// Opaque category identifier.
///
/// Fresh ids are UUID v4 strings. Older snapshots used millisecond timestamps,
/// which are kept as-is so deletes keep working on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recurring spending line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub amount: f64,
    pub period: Period,
}

impl Category {
    pub fn new(name: impl Into<String>, amount: f64, period: Period) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            amount,
            period,
        }
    }

    pub fn monthly_amount(&self) -> f64 {
        normalize_to_month(self.amount, &self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let first = Category::new("Coffee", 5.0, Period::Day);
        let second = Category::new("Coffee", 5.0, Period::Day);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn serializes_with_flat_string_id() {
        let category = Category {
            id: CategoryId::from("1712345678901"),
            name: "Rent".into(),
            amount: 20000.0,
            period: Period::Month,
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["id"], "1712345678901");
        assert_eq!(json["period"], "month");
        assert_eq!(category.monthly_amount(), 20000.0);
    }
}
