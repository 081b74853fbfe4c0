//! HTTP client and service layer for the Octopus Energy API.
//!
//! [`OctopusClient`] is the entry point. It owns an [`HttpClient`] that wraps
//! a [`Transport`]; services borrow it through an `Arc`.
//!
//! # Example
//!
//! ```no_run
//! use octopus_energy::{OctopusClient, AccountNumber};
//!
//! # async fn example() -> octopus_energy::Result<()> {
//! let client = OctopusClient::new("sk_live_abc123")?;
//! let account = client.get_account(&AccountNumber::new("A-1234ABCD")).await?;
//! # Ok(())
//! # }
//! ```

mod blocking;
mod config;
mod http;
pub mod paginated;
mod transport;

use std::sync::Arc;

use serde_json::Value;

pub use blocking::BlockingOctopusClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use http::HttpClient;
pub use paginated::Page;
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError, TransportRequest};

use crate::api::{AccountsService, IndustryService, ProductsQuery, ProductsService};
use crate::auth::ApiKey;
use crate::models::{Account, AccountNumber, Postcode, Product};
use crate::Result;

/// The main client for interacting with the Octopus Energy API.
///
/// Immutable after construction. Cloning is cheap and clones share the
/// underlying connection pool.
///
/// Requests made by one operation are issued one after another; the client
/// never runs requests in parallel on the caller's behalf.
pub struct OctopusClient<T = ReqwestTransport> {
    inner: Arc<HttpClient<T>>,
}

impl OctopusClient {
    /// Create a client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(ApiKey::new(api_key)?, &config)?;
        OctopusClient::with_transport(transport, config)
    }
}

impl<T: Transport> OctopusClient<T> {
    /// Create a client over any [`Transport`].
    pub fn with_transport(transport: T, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(HttpClient::new(transport, config)),
        })
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService<T> {
        AccountsService::new(self.inner.clone())
    }

    /// Get the industry data service.
    pub fn industry(&self) -> IndustryService<T> {
        IndustryService::new(self.inner.clone())
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService<T> {
        ProductsService::new(self.inner.clone())
    }

    /// The status-classifying HTTP layer, for endpoints without a service.
    pub fn http(&self) -> &HttpClient<T> {
        &self.inner
    }

    /// Get an account with its properties and meters.
    pub async fn get_account(&self, account_number: &AccountNumber) -> Result<Account> {
        self.accounts().get(account_number).await
    }

    /// Resolve a postcode to its distribution region name.
    pub async fn get_region_from_postcode(&self, postcode: &Postcode) -> Result<String> {
        self.industry().region_from_postcode(postcode).await
    }

    /// List products matching `query` across all pages.
    pub async fn get_products(&self, query: &ProductsQuery) -> Result<Vec<Product>> {
        self.products().list(query).await
    }

    /// Check that the API is reachable and the key is accepted.
    ///
    /// Returns the first page of the product listing as raw JSON.
    pub async fn check_connection(&self) -> Result<Value> {
        self.products().first_page_raw().await
    }
}

impl<T> Clone for OctopusClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> std::fmt::Debug for OctopusClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctopusClient")
            .field("config", self.inner.config())
            .finish()
    }
}
