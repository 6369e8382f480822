//! # Basic Helpers
//!
//! The smallest helpers: fixed parameters, several parameters of different
//! types, a fallible return and a named multi-value return.

use crate::error::{ValidationError, ValidationResult};
use crate::types::TextSummary;

/// Greeting with no inputs.
pub fn greeting() -> String {
    "Hello from funclab!".to_string()
}

/// Greeting for one person.
pub fn greet_person(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Adds two integers, wrapping on overflow.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// One-line description from parameters of three different types.
///
/// ## Example
/// ```rust
/// use funclab_core::basics::describe_user;
///
/// assert_eq!(
///     describe_user("María", 28, true),
///     "User: María, Age: 28, Status: active"
/// );
/// ```
pub fn describe_user(name: &str, age: i64, active: bool) -> String {
    let status = if active { "active" } else { "inactive" };
    format!("User: {}, Age: {}, Status: {}", name, age, status)
}

/// Divides `a` by `b`.
///
/// ## Example
/// ```rust
/// use funclab_core::basics::divide;
///
/// assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
/// assert!(divide(10.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> ValidationResult<f64> {
    if b == 0.0 {
        return Err(ValidationError::DivisionByZero);
    }

    Ok(a / b)
}

/// Counts words, characters and lines.
///
/// - words: whitespace-separated tokens
/// - characters: Unicode scalar values (`chars()`), not UTF-8 bytes, so
///   "múltiples" counts 9; newlines are included
/// - lines: newline count + 1, so the empty string has one line
pub fn analyze_text(text: &str) -> TextSummary {
    TextSummary {
        words: text.split_whitespace().count(),
        characters: text.chars().count(),
        lines: text.matches('\n').count() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings() {
        assert_eq!(greet_person("Ana"), "Hello, Ana!");
        assert!(!greeting().is_empty());
    }

    #[test]
    fn test_add() {
        assert_eq!(add(15, 25), 40);
        assert_eq!(add(-3, 3), 0);
    }

    #[test]
    fn test_add_wraps_on_overflow() {
        assert_eq!(add(i64::MAX, 1), i64::MIN);
        assert_eq!(add(add(i64::MAX, 1), -1), add(i64::MAX, add(1, -1)));
    }

    #[test]
    fn test_describe_user_inactive() {
        assert_eq!(
            describe_user("Carlos", 40, false),
            "User: Carlos, Age: 40, Status: inactive"
        );
    }

    #[test]
    fn test_divide() {
        for (a, b) in [(10.0, 3.0), (-7.5, 2.5), (0.0, 9.0), (1.0, -4.0)] {
            assert_eq!(divide(a, b).unwrap(), a / b);
        }
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(10.0, 0.0), Err(ValidationError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(ValidationError::DivisionByZero));
    }

    #[test]
    fn test_analyze_text() {
        let summary = analyze_text("Hello world\nThis is an example\nOf multiple lines");
        assert_eq!(summary.words, 9);
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.characters, 48);
    }

    #[test]
    fn test_analyze_text_counts_chars_not_bytes() {
        let summary = analyze_text("múltiples");
        assert_eq!(summary.characters, 9);
        assert_eq!("múltiples".len(), 10);
        assert_eq!(summary.words, 1);
        assert_eq!(summary.lines, 1);
    }

    #[test]
    fn test_analyze_empty_text() {
        let summary = analyze_text("");
        assert_eq!(summary, TextSummary { words: 0, characters: 0, lines: 1 });
    }
}
