//! Field validation primitives for workflow gates.
//!
//! # Responsibility
//! - Hold the compiled patterns shared by all workflows.
//! - Parse user-typed numeric input with leading-prefix semantics.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-я\s]+$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+7|8)\d{10}$").expect("valid phone regex"));
static NUMERIC_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid numeric prefix regex")
});

/// Letters and spaces only, Latin or Cyrillic. Empty input never matches.
pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Regional mobile format: leading `+7` or `8` followed by exactly 10 digits.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Parses the leading numeric prefix of `value` and returns it when positive.
///
/// `"12abc"` parses to `12.0`; leading whitespace is skipped. Input with no
/// numeric prefix, or a zero/negative value, yields `None`.
pub fn parse_positive_number(value: &str) -> Option<f64> {
    let prefix = NUMERIC_PREFIX_RE.find(value.trim_start())?;
    let parsed: f64 = prefix.as_str().parse().ok()?;
    (parsed > 0.0).then_some(parsed)
}

/// Parses a caller-typed record id: positive numeric prefix, truncated to an
/// integer. Values that truncate to zero are rejected.
pub fn parse_positive_id(value: &str) -> Option<i64> {
    let id = parse_positive_number(value)?.trunc() as i64;
    (id > 0).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_name, is_valid_phone, parse_positive_id, parse_positive_number};

    #[test]
    fn name_accepts_latin_cyrillic_and_spaces() {
        assert!(is_valid_name("Central Pharmacy"));
        assert!(is_valid_name("Аптека Вита"));
        assert!(!is_valid_name("Pharmacy 24"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn phone_requires_regional_prefix_and_ten_digits() {
        assert!(is_valid_phone("+79991234567"));
        assert!(is_valid_phone("89991234567"));
        assert!(!is_valid_phone("79991234567"));
        assert!(!is_valid_phone("+7999123456"));
        assert!(!is_valid_phone("+799912345678"));
        assert!(!is_valid_phone("+7 999 123 45 67"));
    }

    #[test]
    fn positive_number_parses_leading_prefix() {
        assert_eq!(parse_positive_number("12abc"), Some(12.0));
        assert_eq!(parse_positive_number("  99.5"), Some(99.5));
        assert_eq!(parse_positive_number("1e3"), Some(1000.0));
        assert_eq!(parse_positive_number("12e"), Some(12.0));
    }

    #[test]
    fn positive_number_rejects_non_positive_and_non_numeric() {
        assert_eq!(parse_positive_number("-5"), None);
        assert_eq!(parse_positive_number("0"), None);
        assert_eq!(parse_positive_number("abc"), None);
        assert_eq!(parse_positive_number(""), None);
    }

    #[test]
    fn positive_id_truncates_and_rejects_zero() {
        assert_eq!(parse_positive_id("5"), Some(5));
        assert_eq!(parse_positive_id("7.9"), Some(7));
        assert_eq!(parse_positive_id("0.5"), None);
        assert_eq!(parse_positive_id("-3"), None);
    }
}
