//! Accounts service.

use std::sync::Arc;

use crate::client::{HttpClient, ReqwestTransport, Transport};
use crate::models::{Account, AccountNumber, Decode};
use crate::Result;

/// Service for account lookups.
///
/// # Example
///
/// ```no_run
/// use octopus_energy::AccountNumber;
///
/// # async fn example(client: octopus_energy::OctopusClient) -> octopus_energy::Result<()> {
/// let account = client.accounts().get(&AccountNumber::new("A-1234ABCD")).await?;
/// for property in &account.properties {
///     println!("{}, {}", property.address_line_1, property.postcode);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService<T = ReqwestTransport> {
    inner: Arc<HttpClient<T>>,
}

impl<T: Transport> AccountsService<T> {
    pub(crate) fn new(inner: Arc<HttpClient<T>>) -> Self {
        Self { inner }
    }

    /// Get an account with all of its properties, meter points and agreements.
    pub async fn get(&self, account_number: &AccountNumber) -> Result<Account> {
        let url = self
            .inner
            .endpoint_with_segment("/accounts/", account_number.as_str())?;
        let body = self.inner.get_json(self.inner.request(url)).await?;
        Account::decode(&body)
    }
}
