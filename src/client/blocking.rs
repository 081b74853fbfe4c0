//! A blocking facade over [`OctopusClient`].

use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use super::{ClientConfig, OctopusClient, ReqwestTransport, Transport};
use crate::api::ProductsQuery;
use crate::models::{Account, AccountNumber, Postcode, Product};
use crate::{Error, Result};

/// Blocking version of [`OctopusClient`].
///
/// Each call runs the async operation to completion on a private
/// current-thread runtime. Do not call it from inside an async context;
/// use [`OctopusClient`] there instead.
///
/// # Example
///
/// ```no_run
/// use octopus_energy::{BlockingOctopusClient, Postcode};
///
/// # fn example() -> octopus_energy::Result<()> {
/// let client = BlockingOctopusClient::new("sk_live_abc123")?;
/// let region = client.get_region_from_postcode(&Postcode::new("SW1A 1AA"))?;
/// println!("{}", region);
/// # Ok(())
/// # }
/// ```
pub struct BlockingOctopusClient<T = ReqwestTransport> {
    client: OctopusClient<T>,
    runtime: Runtime,
}

impl BlockingOctopusClient {
    /// Create a blocking client for the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a blocking client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        BlockingOctopusClient::from_client(OctopusClient::with_config(api_key, config)?)
    }
}

impl<T: Transport> BlockingOctopusClient<T> {
    /// Wrap an existing async client.
    pub fn from_client(client: OctopusClient<T>) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Config(format!("failed to start runtime: {e}")))?;
        Ok(Self { client, runtime })
    }

    /// The wrapped async client.
    pub fn async_client(&self) -> &OctopusClient<T> {
        &self.client
    }

    /// Get an account with its properties and meters.
    pub fn get_account(&self, account_number: &AccountNumber) -> Result<Account> {
        self.runtime.block_on(self.client.get_account(account_number))
    }

    /// Resolve a postcode to its distribution region name.
    pub fn get_region_from_postcode(&self, postcode: &Postcode) -> Result<String> {
        self.runtime
            .block_on(self.client.get_region_from_postcode(postcode))
    }

    /// List products matching `query` across all pages.
    pub fn get_products(&self, query: &ProductsQuery) -> Result<Vec<Product>> {
        self.runtime.block_on(self.client.get_products(query))
    }

    /// Check that the API is reachable and the key is accepted.
    pub fn check_connection(&self) -> Result<Value> {
        self.runtime.block_on(self.client.check_connection())
    }
}

impl<T> std::fmt::Debug for BlockingOctopusClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingOctopusClient")
            .field("client", &self.client)
            .finish()
    }
}
