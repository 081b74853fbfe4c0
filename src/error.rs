//! Error types for the Octopus Energy API client.
//!
//! Every failure a caller can observe is a variant of [`Error`], so callers
//! distinguish the kinds by matching rather than by downcasting.

use std::time::Duration;

use thiserror::Error;

/// A specialized `Result` type for Octopus Energy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed underlying cause carried by transport-level failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for all Octopus Energy API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The API rejected the credentials (401).
    #[error("Authentication failed: invalid credentials")]
    Authentication,

    /// The credentials are valid but lack access to the resource (403).
    #[error("Authorization failed: access forbidden")]
    Authorization,

    /// The requested resource does not exist (404).
    #[error("Resource not found: {url}")]
    NotFound {
        /// URL that produced the 404
        url: String,
    },

    /// Rate limited by the API (429).
    #[error("Rate limited; retry after {retry_after}")]
    RateLimited {
        /// Raw `Retry-After` header value, or `"unknown"` when absent.
        /// Passed through untouched; its unit is whatever the server sent.
        retry_after: String,
    },

    /// Any other non-2xx response.
    #[error("API error: status={status}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body for debugging
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that was in force for the request
        timeout: Duration,
    },

    /// The connection could not be established (DNS, refused, TLS).
    #[error("Failed to connect to API: {0}")]
    Connection(#[source] BoxError),

    /// Any other transport failure.
    #[error("API request failed: {0}")]
    RequestFailed(#[source] BoxError),

    /// A response field was missing or had the wrong shape.
    #[error("Validation failed at `{path}`: {reason}")]
    Validation {
        /// Dotted path of the offending field, e.g. `properties[0].postcode`
        path: String,
        /// What was wrong with it
        reason: String,
    },

    /// The grid-supply-point lookup returned no results.
    #[error("No GSP data found for postcode {postcode}")]
    Lookup {
        /// Postcode that was looked up
        postcode: String,
    },

    /// The response body was not JSON at all.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The client was configured with invalid values.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// The client itself never retries.
    ///
    /// # Example
    ///
    /// ```
    /// use octopus_energy::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Timeout { .. } | Error::RateLimited { .. } | Error::Connection(_) => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication or authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication | Error::Authorization)
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Authentication
            | Error::Authorization
            | Error::NotFound { .. }
            | Error::RateLimited { .. }
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn validation(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Validation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(Error::Timeout {
            timeout: Duration::from_secs(10)
        }
        .is_retryable());
        assert!(Error::RateLimited {
            retry_after: "30".into()
        }
        .is_retryable());
        assert!(Error::Api {
            status: 503,
            body: String::new()
        }
        .is_retryable());
        assert!(!Error::Authentication.is_retryable());
        assert!(!Error::validation("number", "missing field").is_retryable());
    }

    #[test]
    fn test_error_auth() {
        assert!(Error::Authentication.is_auth_error());
        assert!(Error::Authorization.is_auth_error());
        assert!(!Error::NotFound { url: "x".into() }.is_auth_error());
    }

    #[test]
    fn test_client_vs_server() {
        let bad_request = Error::Api {
            status: 400,
            body: String::new(),
        };
        assert!(bad_request.is_client_error());
        assert!(!bad_request.is_server_error());

        let gateway = Error::Api {
            status: 502,
            body: String::new(),
        };
        assert!(gateway.is_server_error());
        assert!(!gateway.is_client_error());
    }

    #[test]
    fn test_display() {
        let err = Error::Timeout {
            timeout: Duration::from_secs(10),
        };
        assert_eq!(err.to_string(), "Request timed out after 10s");

        let err = Error::validation("properties[1].postcode", "missing field");
        assert_eq!(
            err.to_string(),
            "Validation failed at `properties[1].postcode`: missing field"
        );
    }
}
