//! Customer display name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CustomerName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CustomerNameError {
    /// The input string is empty or whitespace-only.
    #[error("name cannot be blank")]
    Blank,
    /// The input string is too short.
    #[error("name must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The input string is too long.
    #[error("name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A customer's display name.
///
/// ## Constraints
///
/// - Must not be blank (whitespace-only input is rejected)
/// - Length: 2-50 characters
///
/// ## Examples
///
/// ```
/// use clientele_core::CustomerName;
///
/// assert!(CustomerName::parse("Alice White").is_ok());
/// assert!(CustomerName::parse("").is_err());    // blank
/// assert!(CustomerName::parse("   ").is_err()); // blank
/// assert!(CustomerName::parse("A").is_err());   // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Minimum length of a customer name.
    pub const MIN_LENGTH: usize = 2;
    /// Maximum length of a customer name.
    pub const MAX_LENGTH: usize = 50;

    /// Parse a `CustomerName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank, shorter than 2 characters,
    /// or longer than 50 characters.
    pub fn parse(s: &str) -> Result<Self, CustomerNameError> {
        if s.trim().is_empty() {
            return Err(CustomerNameError::Blank);
        }

        let length = s.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(CustomerNameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(CustomerNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CustomerName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerName {
    type Err = CustomerNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
