//! The text codec shared by every identifier type.

use crate::{Cursor, ParseError};

/// A value with an exact textual wire format.
///
/// Implementors provide [`write_text`](AwsType::write_text) and
/// [`parse_prefix`](AwsType::parse_prefix); the full-string entry points are
/// derived from them. For every value `v` produced by parsing,
/// `T::from_text(&v.to_text()) == Ok(v)`.
pub trait AwsType: Sized {
    /// Label of the construct, used in error messages.
    const NAME: &'static str;

    /// Appends the text form of `self` to `out`.
    fn write_text(&self, out: &mut String);

    /// Parses a value from the start of the cursor's remaining input.
    ///
    /// Trailing input is left unconsumed. On failure the cursor is left
    /// where it was.
    fn parse_prefix(cursor: &mut Cursor<'_>) -> Result<Self, ParseError>;

    /// Returns the text form of `self`.
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    /// Parses a value that must span the whole of `text`.
    fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(text);
        let result = cursor.attempt(Self::parse_prefix).and_then(|value| {
            if cursor.is_empty() {
                Ok(value)
            } else {
                Err(ParseError::TrailingInput {
                    expected: Self::NAME,
                    remaining: crate::error::excerpt(cursor.rest()),
                })
            }
        });

        if let Err(err) = &result {
            tracing::debug!(kind = Self::NAME, error = %err, "rejected identifier text");
        }

        result
    }
}
