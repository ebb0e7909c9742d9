//! Formatting helpers for presenting analysis figures.

/// Integer with thousands separators: `120000` -> `"120,000"`.
pub fn format_count(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Percentage to two decimal places with a `%` suffix: `25.0` -> `"25.00%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Bare score to two decimal places.
pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(4200), "4,200");
        assert_eq!(format_count(120_000), "120,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-30_000), "-30,000");
    }

    #[test]
    fn percent_keeps_two_decimals() {
        assert_eq!(format_percent(25.0), "25.00%");
        assert_eq!(format_percent(7.5), "7.50%");
        assert_eq!(format_percent(100.0), "100.00%");
    }

    #[test]
    fn scores_keep_two_decimals() {
        assert_eq!(format_score(0.5), "0.50");
        assert_eq!(format_score(12.25), "12.25");
    }
}
