//! The seam between the client and the network.
//!
//! [`Transport`] performs exactly one GET and reports either the raw response
//! or a classifiable failure. Status codes are not interpreted here; that is
//! the job of [`HttpClient`](super::HttpClient).

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

use crate::auth::ApiKey;
use crate::error::BoxError;
use crate::{ClientConfig, Error, Result};

/// A single GET request described as plain data.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Absolute URL
    pub url: String,
    /// Query parameters appended to the URL
    pub query: Vec<(String, String)>,
    /// Time allowed for the whole round trip
    pub timeout: Duration,
    /// Extra request headers
    pub headers: HeaderMap,
}

impl TransportRequest {
    /// Create a request with no query parameters or extra headers.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            timeout,
            headers: HeaderMap::new(),
        }
    }

    /// Replace the query parameters.
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Override the timeout for this request only.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add an extra header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A response as returned by the transport, before status classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body text
    pub body: String,
}

impl RawResponse {
    /// Create a response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a header value as text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request exceeded its timeout.
    #[error("request timed out")]
    Timeout,
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] BoxError),
    /// Anything else that went wrong on the wire.
    #[error("transport failure: {0}")]
    Other(#[source] BoxError),
}

/// Performs one HTTP GET.
///
/// Implementations must not retry and must not treat non-2xx statuses as
/// failures; they hand back whatever the server answered.
pub trait Transport: Send + Sync {
    /// Issue the request.
    fn get(
        &self,
        request: &TransportRequest,
    ) -> impl Future<Output = std::result::Result<RawResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn get(
        &self,
        request: &TransportRequest,
    ) -> impl Future<Output = std::result::Result<RawResponse, TransportError>> + Send {
        (**self).get(request)
    }
}

/// The default [`Transport`], backed by a pooled [`reqwest::Client`].
///
/// The API key is attached as HTTP Basic credentials to every request.
pub struct ReqwestTransport {
    http: reqwest::Client,
    api_key: ApiKey,
}

impl ReqwestTransport {
    /// Build the underlying HTTP client once for reuse across requests.
    pub fn new(api_key: ApiKey, config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, api_key })
    }
}

impl Transport for ReqwestTransport {
    fn get(
        &self,
        request: &TransportRequest,
    ) -> impl Future<Output = std::result::Result<RawResponse, TransportError>> + Send {
        let builder = self
            .http
            .get(&request.url)
            .basic_auth(self.api_key.username(), Some(self.api_key.password()))
            .query(&request.query)
            .headers(request.headers.clone())
            .timeout(request.timeout);

        async move {
            let response = builder.send().await.map_err(classify)?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            let body = response.text().await.map_err(classify)?;

            Ok(RawResponse {
                status,
                headers,
                body,
            })
        }
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("api_key", &self.api_key)
            .finish()
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(Box::new(err))
    } else {
        TransportError::Other(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OctopusClient, Postcode};
    use reqwest::header::RETRY_AFTER;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_request_builder() {
        let request = TransportRequest::new("https://example.com/", Duration::from_secs(10))
            .with_query(vec![("brand".into(), "OCTOPUS_ENERGY".into())])
            .with_timeout(Duration::from_secs(3))
            .with_header(
                reqwest::header::ACCEPT,
                HeaderValue::from_static("application/json"),
            );

        assert_eq!(request.timeout, Duration::from_secs(3));
        assert_eq!(request.query.len(), 1);
        assert_eq!(request.headers.len(), 1);
    }

    #[test]
    fn test_raw_response_helpers() {
        let mut response = RawResponse::new(429, "");
        response
            .headers
            .insert(RETRY_AFTER, HeaderValue::from_static("120"));

        assert!(!response.is_success());
        assert_eq!(response.header("retry-after"), Some("120"));
        assert!(RawResponse::new(204, "").is_success());
    }

    /// Accept one connection, capture the request head, then answer with
    /// `response` after `stall`. Returns the base URL and the captured head.
    fn serve_once(
        response: &'static str,
        stall: Duration,
    ) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 4096];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            thread::sleep(stall);
            // The client may already have hung up after a timeout.
            let _ = stream.write_all(response.as_bytes());
            String::from_utf8_lossy(&head).into_owned()
        });

        (format!("http://{addr}/v1"), handle)
    }

    fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
        head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    }

    #[tokio::test]
    async fn test_sends_basic_auth_and_encoded_query() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 31\r\nConnection: close\r\n\r\n{\"results\":[{\"group_id\":\"_C\"}]}",
            Duration::ZERO,
        );
        let client =
            OctopusClient::with_config("sk_key", ClientConfig::default().with_base_url(base_url))
                .unwrap();

        let region = client
            .get_region_from_postcode(&Postcode::new("SW1A 1AA"))
            .await
            .unwrap();
        assert_eq!(region, "London");

        let head = server.join().unwrap();
        let request_line = head.lines().next().unwrap();
        assert_eq!(
            request_line,
            "GET /v1/industry/grid-supply-points/?postcode=SW1A+1AA HTTP/1.1"
        );
        // base64("sk_key:")
        assert_eq!(
            header_value(&head, "authorization"),
            Some("Basic c2tfa2V5Og==")
        );
    }

    #[tokio::test]
    async fn test_rate_limit_header_from_wire() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 429 Too Many Requests\r\nRetry-After: 17\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            Duration::ZERO,
        );
        let client =
            OctopusClient::with_config("sk_key", ClientConfig::default().with_base_url(base_url))
                .unwrap();

        match client.check_connection().await.unwrap_err() {
            Error::RateLimited { retry_after } => assert_eq!(retry_after, "17"),
            other => panic!("Expected RateLimited, got {other:?}"),
        }
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_stalled_server_times_out() {
        let (base_url, _server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
            Duration::from_secs(3),
        );
        let config = ClientConfig::default()
            .with_base_url(base_url)
            .with_timeout(Duration::from_millis(300));
        let client = OctopusClient::with_config("sk_key", config).unwrap();

        match client.check_connection().await.unwrap_err() {
            Error::Timeout { timeout } => assert_eq!(timeout, Duration::from_millis(300)),
            other => panic!("Expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_closed_port_is_connect_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let transport =
            ReqwestTransport::new(ApiKey::new("key").unwrap(), &ClientConfig::default()).unwrap();
        let request =
            TransportRequest::new(format!("http://127.0.0.1:{port}/"), Duration::from_secs(5));

        let err = transport.get(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::Connect(_)), "{err:?}");
    }
}
