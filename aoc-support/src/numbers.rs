//! Integer list parsers

use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+").expect("integer pattern is valid"));

fn parse_token(token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidInteger {
        token: token.to_string(),
        source,
    })
}

/// Parse whitespace-separated integers.
///
/// # Example
///
/// ```
/// use aoc_support::parse_integers;
///
/// assert_eq!(parse_integers("3 -4 5").unwrap(), vec![3, -4, 5]);
/// ```
pub fn parse_integers(text: &str) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace().map(parse_token).collect()
}

/// Parse comma-separated integers such as `1,2,-3\n`.
pub fn parse_csv_integers(text: &str) -> Result<Vec<i64>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',').map(|token| parse_token(token.trim())).collect()
}

/// Every integer appearing anywhere in `text`, in order.
///
/// Only ASCII digits count and everything else is skipped, so
/// `"498,4 -> 498,6"` gives `[498, 4, 498, 6]`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidInteger`] for a run of digits that does not
/// fit in an `i64`.
pub fn extract_integers(text: &str) -> Result<Vec<i64>, ParseError> {
    INTEGER
        .find_iter(text)
        .map(|m| parse_token(m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_integers("3 -4 5").unwrap(), vec![3, -4, 5]);
        assert_eq!(parse_integers("1\n2\n\n3\n").unwrap(), vec![1, 2, 3]);
        assert!(parse_integers("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_integers_rejects_words() {
        let err = parse_integers("1 two 3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { ref token, .. } if token == "two"));
    }

    #[test]
    fn test_parse_csv_integers() {
        assert_eq!(parse_csv_integers("1,2,-3\n").unwrap(), vec![1, 2, -3]);
        assert_eq!(parse_csv_integers(" 4, 5 ,6").unwrap(), vec![4, 5, 6]);
        assert!(parse_csv_integers("\n").unwrap().is_empty());
        assert!(parse_csv_integers("1,,2").is_err());
    }

    #[test]
    fn test_extract_integers() {
        assert_eq!(
            extract_integers("498,4 -> 498,6 -> 496,6").unwrap(),
            vec![498, 4, 498, 6, 496, 6]
        );
        assert_eq!(extract_integers("x=-2, y=15").unwrap(), vec![-2, 15]);
        assert!(extract_integers("no numbers").unwrap().is_empty());
    }

    #[test]
    fn test_extract_integers_rejects_overflow() {
        let err = extract_integers("1,2 -> 99999999999999999999,3 -> 4,5").unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidInteger { ref token, .. } if token == "99999999999999999999")
        );
    }

    #[test]
    fn test_extract_integers_only_ascii_digits() {
        // Arabic-Indic three is noise, the ASCII digit next to it is kept
        assert_eq!(extract_integers("x=\u{0663}4, y=7").unwrap(), vec![4, 7]);
        assert!(extract_integers("\u{0663}\u{0664}").unwrap().is_empty());
    }
}
