//! Strongly-typed identifiers passed to API calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An Octopus Energy account number, e.g. `A-AAAA1111`.
///
/// # Example
///
/// ```
/// use octopus_energy::AccountNumber;
///
/// let account = AccountNumber::new("A-AAAA1111");
/// assert_eq!(account.as_str(), "A-AAAA1111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Create a new account number from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the account number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A UK postcode, passed to the API exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Postcode(String);

impl Postcode {
    /// Create a new postcode.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the postcode as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Postcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Postcode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Postcode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
