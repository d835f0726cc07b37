//! Numeric-to-text formatting helpers for displaying results.

/// Formats a result value for display.
///
/// With `Some(precision)` the value renders with that many fixed decimals.
/// With `None` ("auto" mode) it renders with up to 6 decimals and trailing
/// zeros trimmed. Non-finite values render as the literals `NaN`, `Inf`,
/// and `-Inf`.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    match precision {
        Some(decimals) => format!("{value:.decimals$}"),
        None => {
            let rendered = format!("{value:.6}");
            let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
            if trimmed == "-0" {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_precision() {
        assert_eq!(format_number(3.14159, Some(2)), "3.14");
        assert_eq!(format_number(10.0, Some(3)), "10.000");
        assert_eq!(format_number(-0.5, Some(0)), "-0");
    }

    #[test]
    fn test_auto_trims_trailing_zeros() {
        assert_eq!(format_number(10.0, None), "10");
        assert_eq!(format_number(0.5, None), "0.5");
        assert_eq!(format_number(1.25, None), "1.25");
        assert_eq!(format_number(-3.0, None), "-3");
    }

    #[test]
    fn test_auto_caps_at_six_decimals() {
        assert_eq!(format_number(1.0 / 3.0, None), "0.333333");
        assert_eq!(format_number(0.1234567, None), "0.123457");
    }

    #[test]
    fn test_auto_negative_zero() {
        assert_eq!(format_number(-0.0, None), "0");
        assert_eq!(format_number(-0.0000001, None), "0");
    }

    #[test]
    fn test_non_finite_literals() {
        assert_eq!(format_number(f64::NAN, None), "NaN");
        assert_eq!(format_number(f64::INFINITY, None), "Inf");
        assert_eq!(format_number(f64::NEG_INFINITY, None), "-Inf");
        assert_eq!(format_number(f64::NAN, Some(2)), "NaN");
    }
}
