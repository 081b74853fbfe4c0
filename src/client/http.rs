//! Status-classifying HTTP wrapper around a [`Transport`].

use serde_json::Value;
use tracing::{debug, error, warn};

use super::config::ClientConfig;
use super::transport::{RawResponse, Transport, TransportError, TransportRequest};
use crate::{Error, Result};

/// Issues single GET requests and turns every failure into an [`Error`].
///
/// One call is one request: nothing is retried here. Callers that want a
/// retry policy can consult [`Error::is_retryable`].
pub struct HttpClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T> HttpClient<T> {
    /// Wrap a transport.
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Start a request to `url` with the configured default timeout.
    pub fn request(&self, url: impl Into<String>) -> TransportRequest {
        TransportRequest::new(url, self.config.timeout)
    }

    /// Absolute URL for an endpoint path such as `/products/`.
    pub fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Absolute URL for `path` followed by one percent-encoded path segment.
    pub fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<String> {
        self.config.endpoint_with_segment(path, segment)
    }
}

impl<T: Transport> HttpClient<T> {
    /// Perform one GET, returning the response only if its status is 2xx.
    pub async fn get(&self, request: TransportRequest) -> Result<RawResponse> {
        debug!(method = "GET", url = %request.url, "Making GET request");

        let response = match self.transport.get(&request).await {
            Ok(response) => response,
            Err(TransportError::Timeout) => {
                error!(url = %request.url, "Request timed out after {:?}", request.timeout);
                return Err(Error::Timeout {
                    timeout: request.timeout,
                });
            }
            Err(TransportError::Connect(source)) => {
                error!(url = %request.url, "Connection failed: {source}");
                return Err(Error::Connection(source));
            }
            Err(TransportError::Other(source)) => {
                error!(url = %request.url, "Request failed: {source}");
                return Err(Error::RequestFailed(source));
            }
        };

        debug!(method = "GET", url = %request.url, status = response.status, "Response received");
        check_status(&request.url, response)
    }

    /// Perform one GET and parse the body as JSON.
    pub async fn get_json(&self, request: TransportRequest) -> Result<Value> {
        let response = self.get(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Map non-success status codes to the matching [`Error`] variant.
pub(crate) fn check_status(url: &str, response: RawResponse) -> Result<RawResponse> {
    if response.is_success() {
        return Ok(response);
    }

    match response.status {
        401 => {
            error!("Authentication failed - invalid API key");
            Err(Error::Authentication)
        }
        403 => {
            error!("Access forbidden - check API permissions");
            Err(Error::Authorization)
        }
        404 => {
            warn!("Resource not found: {url}");
            Err(Error::NotFound {
                url: url.to_string(),
            })
        }
        429 => {
            let retry_after = response
                .header("retry-after")
                .unwrap_or("unknown")
                .to_string();
            warn!("Rate limited - retry after: {retry_after}");
            Err(Error::RateLimited { retry_after })
        }
        status => {
            error!("HTTP error {status}");
            Err(Error::Api {
                status,
                body: response.body,
            })
        }
    }
}

impl<T> std::fmt::Debug for HttpClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish()
    }
}
