use serde::{Deserialize, Serialize};

use super::plural::{PluralCategory, PluralForms};

const MONTHS_PER_YEAR: u64 = 12;

/// Language used for human readable durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    fn vocabulary(&self) -> &'static Vocabulary {
        match self {
            Language::En => &ENGLISH,
            Language::Ru => &RUSSIAN,
        }
    }
}

struct Vocabulary {
    years: PluralForms,
    months: PluralForms,
    conjunction: &'static str,
    under_a_month: &'static str,
    rule: fn(u64) -> PluralCategory,
}

static ENGLISH: Vocabulary = Vocabulary {
    years: PluralForms::new("year", "years", "years"),
    months: PluralForms::new("month", "months", "months"),
    conjunction: "and",
    under_a_month: "less than a month",
    rule: PluralCategory::english,
};

static RUSSIAN: Vocabulary = Vocabulary {
    years: PluralForms::new("год", "года", "лет"),
    months: PluralForms::new("месяц", "месяца", "месяцев"),
    conjunction: "и",
    under_a_month: "меньше месяца",
    rule: PluralCategory::slavic,
};

/// Renders a month count as English text, e.g. `14` -> `"1 year and 2 months"`.
pub fn format_months(months: u64) -> String {
    format_months_in(months, Language::En)
}

/// Renders a month count as years and months in the requested language.
pub fn format_months_in(months: u64, language: Language) -> String {
    let vocabulary = language.vocabulary();
    if months < 1 {
        return vocabulary.under_a_month.to_string();
    }

    let years = months / MONTHS_PER_YEAR;
    let rest = months % MONTHS_PER_YEAR;
    let component = |count: u64, forms: &PluralForms| {
        (count > 0).then(|| format!("{} {}", count, forms.select((vocabulary.rule)(count))))
    };

    match (
        component(years, &vocabulary.years),
        component(rest, &vocabulary.months),
    ) {
        (Some(years), Some(months)) => format!("{} {} {}", years, vocabulary.conjunction, months),
        (Some(single), None) | (None, Some(single)) => single,
        (None, None) => vocabulary.under_a_month.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_durations() {
        assert_eq!(format_months(0), "less than a month");
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(5), "5 months");
        assert_eq!(format_months(12), "1 year");
        assert_eq!(format_months(14), "1 year and 2 months");
        assert_eq!(format_months(24), "2 years");
        assert_eq!(format_months(25), "2 years and 1 month");
    }

    #[test]
    fn russian_durations_follow_slavic_agreement() {
        let ru = |m| format_months_in(m, Language::Ru);
        assert_eq!(ru(0), "меньше месяца");
        assert_eq!(ru(1), "1 месяц");
        assert_eq!(ru(5), "5 месяцев");
        assert_eq!(ru(12), "1 год");
        assert_eq!(ru(14), "1 год и 2 месяца");
        assert_eq!(ru(24), "2 года");
        assert_eq!(ru(60), "5 лет");
        assert_eq!(ru(21 * 12 + 3), "21 год и 3 месяца");
        assert_eq!(ru(11 * 12 + 11), "11 лет и 11 месяцев");
    }

    #[test]
    fn language_codes_roundtrip() {
        assert_eq!(Language::from_code(" RU "), Some(Language::Ru));
        assert_eq!(Language::from_code(Language::En.code()), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
    }
}
