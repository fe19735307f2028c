//! Error types for identifier parsing.

use thiserror::Error;

/// Errors that can occur when parsing an identifier from text.
///
/// Every variant carries the label of the construct that was being parsed
/// (for example `"Region"` or `"Account ID"`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No alternative of the grammar matched the input.
    #[error("unexpected input while parsing {expected}: '{found}'")]
    UnexpectedInput {
        expected: &'static str,
        found: String,
    },

    /// The input ended while the grammar required more characters.
    #[error("incomplete input while parsing {expected}")]
    IncompleteInput { expected: &'static str },

    /// A value was parsed but characters were left over.
    #[error("trailing input after {expected}: '{remaining}'")]
    TrailingInput {
        expected: &'static str,
        remaining: String,
    },

    /// The input had the right shape but failed validation.
    #[error("invalid {expected}: {reason}")]
    InvalidFormat {
        expected: &'static str,
        reason: String,
    },
}

/// Longest excerpt of the input quoted in an error message.
const EXCERPT_LEN: usize = 32;

impl ParseError {
    #[doc(hidden)]
    pub fn unexpected(expected: &'static str, input: &str) -> Self {
        ParseError::UnexpectedInput {
            expected,
            found: excerpt(input),
        }
    }

    pub(crate) fn incomplete(expected: &'static str) -> Self {
        ParseError::IncompleteInput { expected }
    }

    pub(crate) fn invalid(expected: &'static str, reason: impl Into<String>) -> Self {
        ParseError::InvalidFormat {
            expected,
            reason: reason.into(),
        }
    }

    /// Returns the label of the construct that failed to parse.
    pub fn expected(&self) -> &'static str {
        match self {
            ParseError::UnexpectedInput { expected, .. }
            | ParseError::IncompleteInput { expected }
            | ParseError::TrailingInput { expected, .. }
            | ParseError::InvalidFormat { expected, .. } => expected,
        }
    }

    /// Returns true if the input ended too early.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ParseError::IncompleteInput { .. })
    }

    /// Returns true if a valid value was followed by extra characters.
    pub fn is_trailing(&self) -> bool {
        matches!(self, ParseError::TrailingInput { .. })
    }
}

/// Truncates `input` on a char boundary for inclusion in a message.
#[doc(hidden)]
pub fn excerpt(input: &str) -> String {
    match input.char_indices().nth(EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &input[..idx]),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_label() {
        let err = ParseError::incomplete("Region");
        assert_eq!(err.expected(), "Region");
        assert!(err.is_incomplete());
        assert!(!err.is_trailing());
    }

    #[test]
    fn test_excerpt_truncates_long_input() {
        let long = "x".repeat(100);
        let err = ParseError::unexpected("ARN", &long);
        let ParseError::UnexpectedInput { found, .. } = err else {
            panic!("wrong variant");
        };
        assert_eq!(found.len(), EXCERPT_LEN + 3);
        assert!(found.ends_with("..."));
    }

    #[test]
    fn test_display() {
        let err = ParseError::invalid("Account ID", "expected 12 digits");
        assert_eq!(err.to_string(), "invalid Account ID: expected 12 digits");
    }
}
