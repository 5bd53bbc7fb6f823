//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input contains a NUL character, which text columns cannot store.
    #[error("phone cannot contain NUL characters")]
    ContainsNul,
    /// The input string is too long.
    #[error("phone must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A free-form phone number.
///
/// The format is not checked, and an empty string is stored as given. Only
/// NUL characters and the column width of 20 are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Maximum length of a phone number (width of the `telefono` column).
    pub const MAX_LENGTH: usize = 20;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains NUL or is longer than 20
    /// characters.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.contains('\0') {
            return Err(PhoneError::ContainsNul);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_free_form() {
        assert!(Phone::parse("+34 600 000 000").is_ok());
        assert!(Phone::parse("ext. 12").is_ok());
    }

    #[test]
    fn test_parse_empty_is_kept() {
        assert_eq!(Phone::parse("").unwrap().as_str(), "");

        let phone: Option<Phone> = serde_json::from_str("\"\"").unwrap();
        assert_eq!(phone.unwrap().as_str(), "");
    }

    #[test]
    fn test_parse_nul() {
        assert_eq!(Phone::parse("555\01234"), Err(PhoneError::ContainsNul));
    }

    #[test]
    fn test_parse_too_long() {
        assert_eq!(
            Phone::parse("123456789012345678901"),
            Err(PhoneError::TooLong { max: 20 })
        );
    }

    #[test]
    fn test_optional_field_deserializes_null() {
        let phone: Option<Phone> = serde_json::from_str("null").unwrap();
        assert!(phone.is_none());

        let phone: Option<Phone> = serde_json::from_str("\"555-1234\"").unwrap();
        assert_eq!(phone.unwrap().as_str(), "555-1234");
    }
}
