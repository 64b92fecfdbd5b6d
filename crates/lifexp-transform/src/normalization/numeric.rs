//! Numeric normalization utilities.

/// Truncates a cell at its first whitespace character.
///
/// Eurostat cells carry flags after the number (`"58.6 e"`, `"18.6 p"`,
/// `": "`); everything from the first whitespace on is discarded.
pub fn strip_annotation(value: &str) -> &str {
    match value.find(char::is_whitespace) {
        Some(idx) => &value[..idx],
        None => value,
    }
}

/// Parses a string as a finite f64, returning None for invalid, empty,
/// NaN or infinite input.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a year header such as `"2018 "` into an integer.
///
/// Accepts any finite number without a fractional part (`"2018.0"` is 2018).
pub fn parse_year(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(year) = trimmed.parse::<i64>() {
        return Some(year);
    }
    let number = parse_f64(trimmed)?;
    if number.fract() != 0.0 || number.abs() > i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_annotation_drops_flags() {
        assert_eq!(strip_annotation("78.5 e"), "78.5");
        assert_eq!(strip_annotation("58.6 e"), "58.6");
        assert_eq!(strip_annotation("81.0 bep"), "81.0");
        assert_eq!(strip_annotation("80.1"), "80.1");
        assert_eq!(strip_annotation("80.1\tp"), "80.1");
    }

    #[test]
    fn strip_annotation_of_leading_whitespace_is_empty() {
        assert_eq!(strip_annotation(" 80.1"), "");
        assert_eq!(strip_annotation(": "), ":");
    }

    #[test]
    fn parse_f64_rejects_noise() {
        assert_eq!(parse_f64("78.5"), Some(78.5));
        assert_eq!(parse_f64("xyz"), None);
        assert_eq!(parse_f64(":"), None);
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn parse_year_accepts_padded_headers() {
        assert_eq!(parse_year("2018 "), Some(2018));
        assert_eq!(parse_year(" 1960"), Some(1960));
        assert_eq!(parse_year("2018.0"), Some(2018));
    }

    #[test]
    fn parse_year_rejects_non_integers() {
        assert_eq!(parse_year("2018.5"), None);
        assert_eq!(parse_year("geo"), None);
        assert_eq!(parse_year(""), None);
    }
}
