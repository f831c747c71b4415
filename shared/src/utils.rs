// Locale helpers shared by the engine and any display surface.

/// pt-BR number handling: comma decimal separator, optional percent sign.
///
/// Parsers are total: exports mix plain numbers, percent strings and decimal strings for the
/// same quantity, and a malformed cell reads as zero.
pub mod brazilian_format {
    use crate::models::CellValue;
    use chrono::{Datelike, NaiveDate};

    const MONTHS: [&str; 12] = [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ];

    /// Parses values like `"102,5000"` into `102.5`. Numbers pass through, anything else is 0.
    pub fn parse_locale_number(value: &CellValue) -> f64 {
        match value {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => parse_leading_float(&s.replacen(',', ".", 1)),
            CellValue::Empty => 0.0,
        }
    }

    /// Parses values like `"4,25%"` into `4.25` (the magnitude, not a fraction).
    pub fn parse_locale_percent(value: &CellValue) -> f64 {
        match value {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => {
                parse_leading_float(&s.replacen('%', "", 1).replacen(',', ".", 1))
            }
            CellValue::Empty => 0.0,
        }
    }

    /// Renders `4.5` as `"4,50%"`. Ties round away from zero, so `0.125` is `"0,13%"`.
    pub fn format_percent(value: f64) -> String {
        let rounded = (value * 100.0).round() / 100.0;
        format!("{:.2}%", rounded).replacen('.', ",", 1)
    }

    /// Short month label as exported by the fund report, e.g. `"mai./23"`.
    pub fn month_label(date: NaiveDate) -> String {
        format!(
            "{}./{:02}",
            MONTHS[date.month0() as usize],
            date.year().rem_euclid(100)
        )
    }

    // Longest leading decimal literal after optional whitespace; 0 when there is none.
    fn parse_leading_float(s: &str) -> f64 {
        let s = s.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;

        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let int_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digits = end - int_start;
        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            digits += frac_end - frac_start;
            if digits > 0 {
                end = frac_end;
            }
        }
        if digits == 0 {
            return 0.0;
        }
        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }

        match s[..end].parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn text(s: &str) -> CellValue {
            CellValue::text(s)
        }

        #[test]
        fn test_parse_number_comma_decimal() {
            assert_eq!(parse_locale_number(&text("102,5000")), 102.5);
            assert_eq!(parse_locale_number(&text("-1,33")), -1.33);
        }

        #[test]
        fn test_parse_number_passthrough_and_defaults() {
            assert_eq!(parse_locale_number(&CellValue::Number(42.0)), 42.0);
            assert_eq!(parse_locale_number(&text("abc")), 0.0);
            assert_eq!(parse_locale_number(&text("")), 0.0);
            assert_eq!(parse_locale_number(&text("-")), 0.0);
            assert_eq!(parse_locale_number(&CellValue::Empty), 0.0);
        }

        #[test]
        fn test_parse_number_uses_numeric_prefix() {
            assert_eq!(parse_locale_number(&text("4,25%")), 4.25);
            assert_eq!(parse_locale_number(&text("  7,5 pts")), 7.5);
            // Only the first comma is a decimal separator.
            assert_eq!(parse_locale_number(&text("1,2,3")), 1.2);
            assert_eq!(parse_locale_number(&text("1.234,56")), 1.234);
        }

        #[test]
        fn test_parse_number_exponent() {
            assert_eq!(parse_locale_number(&text("1,5e2")), 150.0);
            assert_eq!(parse_locale_number(&text("2e")), 2.0);
        }

        // Non-finite results read as 0 so every downstream value stays finite.
        #[test]
        fn test_parse_number_non_finite_is_zero() {
            assert_eq!(parse_locale_number(&text("1e400")), 0.0);
            assert_eq!(parse_locale_number(&text("Infinity")), 0.0);
            assert_eq!(parse_locale_percent(&text("-1e400%")), 0.0);
        }

        #[test]
        fn test_parse_percent() {
            assert_eq!(parse_locale_percent(&text("4,25%")), 4.25);
            assert_eq!(parse_locale_percent(&text("-0,07%")), -0.07);
            assert_eq!(parse_locale_percent(&text("8,5%")), 8.5);
            assert_eq!(parse_locale_percent(&text("")), 0.0);
            assert_eq!(parse_locale_percent(&text("%")), 0.0);
            assert_eq!(parse_locale_percent(&CellValue::Number(3.92)), 3.92);
        }

        #[test]
        fn test_format_percent() {
            assert_eq!(format_percent(4.5), "4,50%");
            assert_eq!(format_percent(10.5 - 10.57), "-0,07%");
            assert_eq!(format_percent(0.0), "0,00%");
            assert_eq!(format_percent(1234.567), "1234,57%");
            assert_eq!(format_percent(0.125), "0,13%");
            assert_eq!(format_percent(-0.125), "-0,13%");
            assert_eq!(format_percent(4.125), "4,13%");
        }

        #[test]
        fn test_month_label() {
            let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
            assert_eq!(month_label(date), "mai./23");
            let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
            assert_eq!(month_label(date), "dez./24");
        }
    }
}
