use std::fmt;

/// Logical input fields that receive their own feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Income,
    CategoryName,
    CategoryAmount,
    GoalName,
    GoalAmount,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Income,
        Field::CategoryName,
        Field::CategoryAmount,
        Field::GoalName,
        Field::GoalAmount,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Income => "income",
            Field::CategoryName => "category-name",
            Field::CategoryAmount => "category-amount",
            Field::GoalName => "goal-name",
            Field::GoalAmount => "goal-amount",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase().replace('_', "-");
        Field::ALL.into_iter().find(|field| field.key() == key)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Field::Income => 0,
            Field::CategoryName => 1,
            Field::CategoryAmount => 2,
            Field::GoalName => 3,
            Field::GoalAmount => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Transient status shown next to a field. Error and success cannot coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldFeedback {
    #[default]
    Neutral,
    Error(String),
    Success(String),
}

impl FieldFeedback {
    pub fn is_neutral(&self) -> bool {
        matches!(self, FieldFeedback::Neutral)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FieldFeedback::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FieldFeedback::Success(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldFeedback::Neutral => None,
            FieldFeedback::Error(message) | FieldFeedback::Success(message) => Some(message),
        }
    }
}
