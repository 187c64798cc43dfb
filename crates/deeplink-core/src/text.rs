//! Lenient string conversions and character-class queries.

/// Parse an integer, falling back to `0`.
#[must_use]
pub fn lenient_int(s: &str) -> i64 {
    s.parse().unwrap_or(0)
}

/// Parse a float, falling back to `0.0`.
#[must_use]
pub fn lenient_f64(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}

/// Interpret a string as a boolean.
///
/// Accepts the literals `true`/`false`, any integer (positive is `true`), and
/// case-insensitive `true`, `yes` or `y`. Everything else is `false`.
#[must_use]
pub fn lenient_bool(s: &str) -> bool {
    match s {
        "true" => return true,
        "false" => return false,
        _ => {}
    }

    if let Ok(n) = s.parse::<i64>() {
        return n > 0;
    }

    ["true", "yes", "y"]
        .iter()
        .any(|candidate| s.eq_ignore_ascii_case(candidate))
}

#[must_use]
pub fn contains_numbers(s: &str) -> bool {
    s.chars().any(char::is_numeric)
}

#[must_use]
pub fn contains_letters(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}

/// Has numbers and no letters. Punctuation is ignored.
#[must_use]
pub fn is_numeric(s: &str) -> bool {
    contains_numbers(s) && !contains_letters(s)
}

/// Has letters and no numbers. Punctuation is ignored.
#[must_use]
pub fn is_alphabetic(s: &str) -> bool {
    !contains_numbers(s) && contains_letters(s)
}

/// Has both letters and numbers.
#[must_use]
pub fn is_alphanumeric(s: &str) -> bool {
    contains_letters(s) && contains_numbers(s)
}

/// Keep only the characters of `s` that appear in `allowed`.
///
/// Returns `None` when nothing survives the filter.
#[must_use]
pub fn retain_chars(s: &str, allowed: &str) -> Option<String> {
    let kept: String = s.chars().filter(|c| allowed.contains(*c)).collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept)
    }
}

/// Extract the ASCII digits of `s`, e.g. `"(619) 555-0100"` → `"6195550100"`.
#[must_use]
pub fn digits(s: &str) -> Option<String> {
    retain_chars(s, "0123456789")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_int_parses_or_defaults() {
        assert_eq!(lenient_int("42"), 42);
        assert_eq!(lenient_int("-7"), -7);
        assert_eq!(lenient_int("4.2"), 0);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int(""), 0);
    }

    #[test]
    fn lenient_f64_parses_or_defaults() {
        assert!((lenient_f64("3.25") - 3.25).abs() < f64::EPSILON);
        assert!(lenient_f64("nope").abs() < f64::EPSILON);
    }

    #[test]
    fn lenient_bool_literals() {
        assert!(lenient_bool("true"));
        assert!(!lenient_bool("false"));
    }

    #[test]
    fn lenient_bool_integers() {
        assert!(lenient_bool("1"));
        assert!(lenient_bool("12"));
        assert!(!lenient_bool("0"));
        assert!(!lenient_bool("-3"));
    }

    #[test]
    fn lenient_bool_words_are_case_insensitive() {
        assert!(lenient_bool("TRUE"));
        assert!(lenient_bool("Yes"));
        assert!(lenient_bool("y"));
        assert!(!lenient_bool("no"));
        assert!(!lenient_bool("FALSE"));
        assert!(!lenient_bool(""));
    }

    #[test]
    fn character_classes() {
        assert!(is_numeric("555-0100"));
        assert!(!is_numeric("abc1"));
        assert!(is_alphabetic("Main St."));
        assert!(!is_alphabetic("Main St 1"));
        assert!(is_alphanumeric("abc123"));
        assert!(!is_alphanumeric("abc"));
        assert!(!is_alphanumeric("123"));
    }

    #[test]
    fn digits_extracts_only_numbers() {
        assert_eq!(digits("(619) 555-0100").as_deref(), Some("6195550100"));
        assert_eq!(digits("no numbers"), None);
    }

    #[test]
    fn retain_chars_keeps_allowed_set() {
        assert_eq!(
            retain_chars("+1 (619) 555.0100", "0123456789+-.").as_deref(),
            Some("+1619555.0100")
        );
        assert_eq!(retain_chars("xyz", "abc"), None);
    }
}
