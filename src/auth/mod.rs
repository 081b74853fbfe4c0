//! Credentials for the Octopus Energy API.
//!
//! The API uses HTTP Basic authentication with the account's API key as the
//! username and an empty password.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// An Octopus Energy API key.
///
/// The key is held in a [`SecretString`] and is never printed by `Debug`.
///
/// # Example
///
/// ```
/// use octopus_energy::ApiKey;
///
/// let key = ApiKey::new("sk_live_abc123").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey(***)");
/// ```
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Wrap an API key. Fails if the key is empty or only whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }
        Ok(Self(SecretString::from(key)))
    }

    /// Username half of the Basic credentials.
    pub(crate) fn username(&self) -> &str {
        self.0.expose_secret()
    }

    /// Password half of the Basic credentials; always empty.
    pub(crate) fn password(&self) -> &'static str {
        ""
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(ApiKey::new(""), Err(Error::Config(_))));
        assert!(matches!(ApiKey::new("   "), Err(Error::Config(_))));
    }

    #[test]
    fn test_basic_credentials() {
        let key = ApiKey::new("sk_test_123").unwrap();
        assert_eq!(key.username(), "sk_test_123");
        assert_eq!(key.password(), "");
    }

    #[test]
    fn test_debug_redacts() {
        let key = ApiKey::new("sk_test_123").unwrap();
        assert!(!format!("{:?}", key).contains("sk_test_123"));
    }
}
