//! Splitting of raw pattern strings into literal and inline-regex pieces.
//!
//! A path pattern may embed raw regular-expression fragments in parentheses,
//! e.g. `/page/(\d{3})`. This module separates such balanced `(...)` spans
//! from the surrounding literal/placeholder text before tokenization.

use rove_core::{RoveError, RoveResult};

/// One piece of a split pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Literal or placeholder text (params, wildcards, plain path segments).
    Literal(String),
    /// A complete balanced inline-regex span, outer parentheses included.
    Group(String),
}

/// Splits a raw pattern string into literal pieces and balanced `(...)` spans.
///
/// Nested parentheses are kept together: a span is flushed only when the
/// parenthesis balance returns to zero. Any text after a span's final closing
/// parenthesis starts the next literal piece.
///
/// # Errors
///
/// Returns [`RoveError::PatternCompile`] when the parentheses never balance
/// by end-of-string. Trailing content is never silently dropped.
///
/// # Examples
///
/// ```
/// use rove_router::pattern::splitter::{split_pattern, Piece};
///
/// let pieces = split_pattern(r"/page/(\d{3})/edit").unwrap();
/// assert_eq!(
///     pieces,
///     vec![
///         Piece::Literal("/page/".to_string()),
///         Piece::Group(r"(\d{3})".to_string()),
///         Piece::Literal("/edit".to_string()),
///     ]
/// );
/// ```
pub fn split_pattern(pattern: &str) -> RoveResult<Vec<Piece>> {
    let mut pieces = Vec::new();
    let mut rest = pattern;

    while let Some(open) = rest.find('(') {
        if open > 0 {
            pieces.push(Piece::Literal(rest[..open].to_string()));
        }

        let mut depth = 0usize;
        let mut close = None;
        for (i, ch) in rest[open..].char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(open + i + 1);
                        break;
                    }
                }
                _ => {}
            }
        }

        let Some(close) = close else {
            return Err(RoveError::pattern_compile(
                pattern,
                "unbalanced parentheses in inline expression",
            ));
        };

        pieces.push(Piece::Group(rest[open..close].to_string()));
        rest = &rest[close..];
    }

    if !rest.is_empty() {
        pieces.push(Piece::Literal(rest.to_string()));
    }

    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_no_groups() {
        let pieces = split_pattern("/user/:id").unwrap();
        assert_eq!(pieces, vec![Piece::Literal("/user/:id".to_string())]);
    }

    #[test]
    fn test_split_single_group() {
        let pieces = split_pattern(r"/page/(\d{3})").unwrap();
        assert_eq!(
            pieces,
            vec![
                Piece::Literal("/page/".to_string()),
                Piece::Group(r"(\d{3})".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_nested_group_stays_whole() {
        let pieces = split_pattern("/a/((x|y)z)").unwrap();
        assert_eq!(
            pieces,
            vec![
                Piece::Literal("/a/".to_string()),
                Piece::Group("((x|y)z)".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_trailing_literal_after_group() {
        let pieces = split_pattern("/a/(b)c/(d)").unwrap();
        assert_eq!(
            pieces,
            vec![
                Piece::Literal("/a/".to_string()),
                Piece::Group("(b)".to_string()),
                Piece::Literal("c/".to_string()),
                Piece::Group("(d)".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_leading_group() {
        let pieces = split_pattern("(ab)/tail").unwrap();
        assert_eq!(
            pieces,
            vec![
                Piece::Group("(ab)".to_string()),
                Piece::Literal("/tail".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_unbalanced_rejected() {
        let err = split_pattern("/a/(bc").unwrap_err();
        assert!(err.to_string().contains("unbalanced"));
    }

    #[test]
    fn test_split_unbalanced_nested_rejected() {
        assert!(split_pattern("/a/((b)").is_err());
    }

    #[test]
    fn test_split_empty_pattern() {
        assert_eq!(split_pattern("").unwrap(), Vec::new());
    }
}
