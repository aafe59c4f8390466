//! Tag delimiter pairs.

use netag_foundation::{Error, ErrorKind, Result};

/// The left/right strings that bracket a tag, `<` and `>` by default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delimiters {
    left: String,
    right: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            left: "<".to_string(),
            right: ">".to_string(),
        }
    }
}

impl Delimiters {
    /// Creates a delimiter pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either delimiter is empty.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Result<Self> {
        let left = left.into();
        let right = right.into();
        if left.is_empty() || right.is_empty() {
            return Err(Error::new(ErrorKind::InvalidArgument(
                "tag delimiters must not be empty".to_string(),
            )));
        }
        Ok(Self { left, right })
    }

    /// The opening delimiter.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The closing delimiter.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Returns true if `token` is markup rather than text.
    ///
    /// A tag starts with the left delimiter followed immediately by `/` or an
    /// ASCII letter. Anything else (`<3`, `< b>`) is ordinary text.
    #[must_use]
    pub fn is_tag(&self, token: &str) -> bool {
        token
            .strip_prefix(self.left.as_str())
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c == '/' || c.is_ascii_alphabetic())
    }

    /// Removes the delimiters from a tag token.
    ///
    /// Tokens too short to carry both delimiters, or not bracketed by them,
    /// are returned unchanged.
    #[must_use]
    pub fn strip<'a>(&self, token: &'a str) -> &'a str {
        if token.len() < self.left.len() + self.right.len() {
            return token;
        }
        token
            .strip_prefix(self.left.as_str())
            .and_then(|rest| rest.strip_suffix(self.right.as_str()))
            .unwrap_or(token)
    }
}
