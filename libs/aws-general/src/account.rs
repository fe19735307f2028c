//! Account identifiers.

use crate::{AwsType, Cursor, ParseError};

/// A 12-digit AWS account ID, e.g. `123456789012`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Number of digits in an account ID.
    pub const LENGTH: usize = 12;

    /// Creates an account ID, validating that `id` is exactly 12 ASCII digits.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ParseError> {
        Self::from_text(id.as_ref())
    }

    /// Returns the account ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AwsType for AccountId {
    const NAME: &'static str = "Account ID";

    fn write_text(&self, out: &mut String) {
        out.push_str(&self.0);
    }

    fn parse_prefix(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let start = cursor.checkpoint();
        let digits = cursor.take_while_max(Self::LENGTH, |c| c.is_ascii_digit());
        if digits.len() == Self::LENGTH {
            return Ok(Self(digits.to_string()));
        }

        let reason = match cursor.peek() {
            None => format!(
                "expected {} digits, input ended after {}",
                Self::LENGTH,
                digits.len()
            ),
            Some(c) => format!(
                "expected {} digits, found '{}' at position {}",
                Self::LENGTH,
                c,
                digits.len()
            ),
        };
        cursor.restore(start);
        Err(ParseError::invalid(Self::NAME, reason))
    }
}

crate::impl_text_traits!(AccountId);

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A canonical user ID: a non-empty string of hex digits.
///
/// Used by S3 to identify account owners. Hex digits are accepted in either
/// case and kept as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalUserId(String);

impl CanonicalUserId {
    /// Creates a canonical user ID, validating that `id` is non-empty hex.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ParseError> {
        Self::from_text(id.as_ref())
    }

    /// Returns the canonical user ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AwsType for CanonicalUserId {
    const NAME: &'static str = "Canonical User ID";

    fn write_text(&self, out: &mut String) {
        out.push_str(&self.0);
    }

    fn parse_prefix(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let hex = cursor.take_while(|c| c.is_ascii_hexdigit());
        if hex.is_empty() {
            return Err(if cursor.is_empty() {
                ParseError::incomplete(Self::NAME)
            } else {
                ParseError::unexpected(Self::NAME, cursor.rest())
            });
        }
        Ok(Self(hex.to_string()))
    }
}

crate::impl_text_traits!(CanonicalUserId);

impl AsRef<str> for CanonicalUserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
