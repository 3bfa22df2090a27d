/// Separator placed between thousands groups (narrow enough for terminals).
pub const GROUPING_SEPARATOR: char = ' ';

/// Formats an amount for display: `15000` -> `"15 000 ₽"`, `1234.5` -> `"1 234.50 ₽"`.
///
/// Whole amounts drop their fraction; anything else keeps two decimals.
pub fn format_money(amount: f64, symbol: &str) -> String {
    let body = format_amount(amount);
    if symbol.is_empty() {
        body
    } else {
        format!("{} {}", body, symbol)
    }
}

/// Grouped number without a currency symbol.
pub fn format_amount(amount: f64) -> String {
    let precision = if amount.fract().abs() < f64::EPSILON { 0 } else { 2 };
    let rendered = format!("{:.*}", precision, amount.abs());
    let (int_part, fraction) = match rendered.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut body = group_digits(int_part, GROUPING_SEPARATOR);
    if let Some(fraction) = fraction {
        body.push('.');
        body.push_str(fraction);
    }
    if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        body.insert(0, '-');
    }
    body
}

/// Plain value for putting an accepted amount back into an input field.
pub fn format_input_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_money(15000.0, "₽"), "15 000 ₽");
        assert_eq!(format_money(1234567.0, "₽"), "1 234 567 ₽");
        assert_eq!(format_money(999.0, "₽"), "999 ₽");
        assert_eq!(format_money(0.0, "₽"), "0 ₽");
    }

    #[test]
    fn keeps_two_decimals_for_fractions() {
        assert_eq!(format_money(1234.5, "$"), "1 234.50 $");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_money(-20000.0, "₽"), "-20 000 ₽");
        assert_eq!(format_amount(-0.0), "0");
    }

    #[test]
    fn input_amount_is_ungrouped() {
        assert_eq!(format_input_amount(75000.0), "75000");
        assert_eq!(format_input_amount(12.5), "12.5");
    }
}
