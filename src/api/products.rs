//! Products service.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::client::{HttpClient, ReqwestTransport, Transport};
use crate::models::{decode_all, Product};
use crate::Result;

/// Brand used when the caller does not pick one.
pub const DEFAULT_BRAND: &str = "OCTOPUS_ENERGY";

/// Filters for listing products.
///
/// Only filters that were set are sent to the API.
///
/// # Example
///
/// ```
/// use octopus_energy::api::ProductsQuery;
///
/// let query = ProductsQuery::new().is_green(true).is_business(false);
/// assert_eq!(
///     query.to_params(),
///     vec![
///         ("brand".to_string(), "OCTOPUS_ENERGY".to_string()),
///         ("is_business".to_string(), "false".to_string()),
///         ("is_green".to_string(), "true".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsQuery {
    /// Brand to list products for
    pub brand: String,
    /// Only variable (or only fixed) products
    pub is_variable: Option<bool>,
    /// Only business (or only domestic) products
    pub is_business: Option<bool>,
    /// Only green products
    pub is_green: Option<bool>,
    /// Only prepay products
    pub is_prepay: Option<bool>,
    /// Only products on sale at this instant
    pub available_at: Option<DateTime<Utc>>,
}

impl Default for ProductsQuery {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            is_variable: None,
            is_business: None,
            is_green: None,
            is_prepay: None,
            available_at: None,
        }
    }
}

impl ProductsQuery {
    /// A query for every product of the default brand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Filter on variable pricing.
    pub fn is_variable(mut self, value: bool) -> Self {
        self.is_variable = Some(value);
        self
    }

    /// Filter on business products.
    pub fn is_business(mut self, value: bool) -> Self {
        self.is_business = Some(value);
        self
    }

    /// Filter on green products.
    pub fn is_green(mut self, value: bool) -> Self {
        self.is_green = Some(value);
        self
    }

    /// Filter on prepay products.
    pub fn is_prepay(mut self, value: bool) -> Self {
        self.is_prepay = Some(value);
        self
    }

    /// Only products available at `instant`.
    pub fn available_at(mut self, instant: DateTime<Utc>) -> Self {
        self.available_at = Some(instant);
        self
    }

    /// Query parameters for the first page request.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("brand".to_string(), self.brand.clone())];

        let flags = [
            ("is_variable", self.is_variable),
            ("is_business", self.is_business),
            ("is_green", self.is_green),
            ("is_prepay", self.is_prepay),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                params.push((name.to_string(), value.to_string()));
            }
        }

        if let Some(instant) = self.available_at {
            params.push((
                "available_at".to_string(),
                instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ));
        }

        params
    }
}

/// Service for product listings.
///
/// # Example
///
/// ```no_run
/// use octopus_energy::api::ProductsQuery;
///
/// # async fn example(client: octopus_energy::OctopusClient) -> octopus_energy::Result<()> {
/// let products = client.products().list(&ProductsQuery::new().is_variable(true)).await?;
/// for product in products {
///     println!("{} - {}", product.code, product.display_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProductsService<T = ReqwestTransport> {
    inner: Arc<HttpClient<T>>,
}

impl<T: Transport> ProductsService<T> {
    pub(crate) fn new(inner: Arc<HttpClient<T>>) -> Self {
        Self { inner }
    }

    /// List every product matching `query`, across all pages, in server order.
    pub async fn list(&self, query: &ProductsQuery) -> Result<Vec<Product>> {
        let url = self.inner.endpoint("/products/");
        let raw = self.inner.fetch_all_pages(&url, &query.to_params()).await?;
        decode_all(&raw, "results")
    }

    /// Fetch the first page of `/products/` untouched.
    ///
    /// Useful as a connectivity and credentials check.
    pub async fn first_page_raw(&self) -> Result<Value> {
        let url = self.inner.endpoint("/products/");
        self.inner.get_json(self.inner.request(url)).await
    }
}
