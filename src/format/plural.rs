/// Numeral agreement class of a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Few,
    Many,
}

impl PluralCategory {
    /// Slavic agreement: 1, 21, 31 take `One`; 2-4, 22-24 take `Few`;
    /// everything else, including 11-14, takes `Many`.
    pub fn slavic(n: u64) -> Self {
        let d1 = n % 10;
        let d100 = n % 100;
        if d1 == 1 && d100 != 11 {
            PluralCategory::One
        } else if (2..=4).contains(&d1) && (d100 < 10 || d100 >= 20) {
            PluralCategory::Few
        } else {
            PluralCategory::Many
        }
    }

    /// English only distinguishes a single item from everything else.
    pub fn english(n: u64) -> Self {
        if n == 1 {
            PluralCategory::One
        } else {
            PluralCategory::Many
        }
    }
}

/// The three word forms a unit can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl PluralForms {
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    pub fn select(&self, category: PluralCategory) -> &'static str {
        match category {
            PluralCategory::One => self.one,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
        }
    }
}

/// Picks the form of a unit word that agrees with `n` under the Slavic rule.
pub fn pluralize<'a>(n: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    match PluralCategory::slavic(n) {
        PluralCategory::One => one,
        PluralCategory::Few => few,
        PluralCategory::Many => many,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(n: u64) -> &'static str {
        pluralize(n, "one", "few", "many")
    }

    #[test]
    fn ones_except_eleven() {
        for n in [1, 21, 31, 101, 1001] {
            assert_eq!(form(n), "one", "n = {n}");
        }
        assert_eq!(form(11), "many");
        assert_eq!(form(111), "many");
    }

    #[test]
    fn few_outside_teens() {
        for n in [2, 3, 4, 22, 33, 44, 102] {
            assert_eq!(form(n), "few", "n = {n}");
        }
        for n in [12, 13, 14, 112] {
            assert_eq!(form(n), "many", "n = {n}");
        }
    }

    #[test]
    fn many_for_zero_and_upper_digits() {
        for n in [0, 5, 9, 10, 15, 19, 20, 25, 100] {
            assert_eq!(form(n), "many", "n = {n}");
        }
    }

    #[test]
    fn english_rule_is_singular_only_for_one() {
        assert_eq!(PluralCategory::english(1), PluralCategory::One);
        assert_eq!(PluralCategory::english(21), PluralCategory::Many);
        assert_eq!(PluralCategory::english(0), PluralCategory::Many);
    }
}
