//! Industry data service (grid supply points).

use std::sync::Arc;

use crate::client::{HttpClient, ReqwestTransport, Transport};
use crate::models::decode::Fields;
use crate::models::{region_name_from_gsp_code, Postcode};
use crate::{Error, Result};

/// Service for industry reference data.
///
/// # Example
///
/// ```no_run
/// use octopus_energy::Postcode;
///
/// # async fn example(client: octopus_energy::OctopusClient) -> octopus_energy::Result<()> {
/// let region = client.industry().region_from_postcode(&Postcode::new("SW1A 1AA")).await?;
/// println!("Region: {}", region);
/// # Ok(())
/// # }
/// ```
pub struct IndustryService<T = ReqwestTransport> {
    inner: Arc<HttpClient<T>>,
}

impl<T: Transport> IndustryService<T> {
    pub(crate) fn new(inner: Arc<HttpClient<T>>) -> Self {
        Self { inner }
    }

    /// Get the GSP group id (e.g. `_C`) serving a postcode.
    ///
    /// Fails with [`Error::Lookup`] when the API knows no supply point for
    /// the postcode. A first result without `group_id` yields an empty id.
    pub async fn gsp_group_id(&self, postcode: &Postcode) -> Result<String> {
        let url = self.inner.endpoint("/industry/grid-supply-points/");
        let request = self
            .inner
            .request(url)
            .with_query(vec![("postcode".to_string(), postcode.to_string())]);
        let body = self.inner.get_json(request).await?;

        let results = Fields::new(&body, "")?.raw_array("results")?;
        let first = results.first().ok_or_else(|| Error::Lookup {
            postcode: postcode.to_string(),
        })?;

        Fields::new(first, "results[0]")?.string_or_default("group_id")
    }

    /// Resolve a postcode to its distribution region name.
    ///
    /// Unknown group ids resolve to `Unknown Region (<id>)` rather than an
    /// error; see [`region_name_from_gsp_code`].
    pub async fn region_from_postcode(&self, postcode: &Postcode) -> Result<String> {
        let group_id = self.gsp_group_id(postcode).await?;
        Ok(region_name_from_gsp_code(&group_id))
    }
}
