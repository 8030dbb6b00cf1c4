//! User Name Value Object
//!
//! The login handle of a provisioned account. Matching is exact: no case
//! folding, so `Admin` and `admin` are different accounts.
//!
//! ## Invariants
//! - Length: 3 to 50 characters (after trimming)
//! - No whitespace or control characters

use std::fmt;

use thiserror::Error;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("username is required")]
    Empty,

    #[error("username must be between {min} and {max} characters")]
    Length { length: usize, min: usize, max: usize },

    #[error("username cannot contain whitespace or control characters")]
    InvalidCharacter,
}

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Trim and validate raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = input.as_ref().trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = trimmed.chars().count();
        if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&length) {
            return Err(UserNameError::Length {
                length,
                min: USER_NAME_MIN_LENGTH,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserName({})", self.0)
    }
}
