//! Extraction of the parenthesized work estimate embedded in card titles.

use tracing::warn;

/// Parse the integer estimate between the first `(` and the first `)` of
/// `title`, returning `0` when either parenthesis is absent.
///
/// Only the first parenthesized group counts; `"Fix (2) then (9)"` yields 2.
/// Content that is empty or not a non-negative integer contributes `0` and
/// logs a warning instead of failing the whole run; one badly-titled card
/// must not block reporting on the rest.
///
/// # Examples
///
/// ```
/// use burndown_core::estimate::parse_estimate;
///
/// assert_eq!(parse_estimate("Fix bug (3)"), 3);
/// assert_eq!(parse_estimate("No estimate here"), 0);
/// assert_eq!(parse_estimate("Empty ()"), 0);
/// ```
pub fn parse_estimate(title: &str) -> u64 {
    let Some(start) = title.find('(') else {
        return 0;
    };
    let Some(end) = title.find(')') else {
        return 0;
    };
    // ")" before "(" or immediately after it: nothing between the pair.
    if end <= start + 1 {
        return 0;
    }

    let inner = title[start + 1..end].trim();
    match inner.parse::<u64>() {
        Ok(value) => value,
        Err(_) => {
            warn!("Unparsable estimate \"{}\" in card title \"{}\"", inner, title);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_estimate_basic() {
        assert_eq!(parse_estimate("Task (5)"), 5);
    }

    #[test]
    fn test_parse_estimate_no_parentheses() {
        assert_eq!(parse_estimate("Task"), 0);
    }

    #[test]
    fn test_parse_estimate_only_open() {
        assert_eq!(parse_estimate("Task (5"), 0);
    }

    #[test]
    fn test_parse_estimate_only_close() {
        assert_eq!(parse_estimate("Task 5)"), 0);
    }

    #[test]
    fn test_parse_estimate_empty_parens() {
        assert_eq!(parse_estimate("Task ()"), 0);
    }

    #[test]
    fn test_parse_estimate_close_before_open() {
        assert_eq!(parse_estimate(") oops ("), 0);
    }

    #[test]
    fn test_parse_estimate_first_group_wins() {
        assert_eq!(parse_estimate("Fix (2) then port (9)"), 2);
    }

    #[test]
    fn test_parse_estimate_non_numeric_is_zero() {
        assert_eq!(parse_estimate("Task (TBD)"), 0);
    }

    #[test]
    fn test_parse_estimate_negative_is_zero() {
        // Estimates are non-negative; a negative value is malformed input.
        assert_eq!(parse_estimate("Task (-3)"), 0);
    }

    #[test]
    fn test_parse_estimate_surrounding_whitespace() {
        assert_eq!(parse_estimate("Task ( 12 )"), 12);
    }

    #[test]
    fn test_parse_estimate_zero_value() {
        assert_eq!(parse_estimate("Task (0)"), 0);
    }

    #[test]
    fn test_parse_estimate_large_value() {
        assert_eq!(parse_estimate("Epic (1000)"), 1000);
    }

    #[test]
    fn test_parse_estimate_estimate_mid_title() {
        assert_eq!(parse_estimate("Refactor (8) the parser"), 8);
    }
}
