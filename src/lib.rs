//! # octopus-energy
//!
//! A Rust client for the Octopus Energy REST API.
//!
//! ## Features
//!
//! - **Accounts**: Properties, electricity and gas meter points, tariff agreements
//! - **Regions**: Postcode to grid supply point region lookup
//! - **Products**: Filtered product listings across every page
//! - **Validated models**: Every field is checked on decode; failures name the field path
//! - **Typed errors**: One error enum covering HTTP statuses, transport failures and decoding
//! - **Async and blocking**: Built on Tokio and reqwest, with a blocking facade
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octopus_energy::{OctopusClient, AccountNumber};
//!
//! #[tokio::main]
//! async fn main() -> octopus_energy::Result<()> {
//!     let client = OctopusClient::new("sk_live_abc123")?;
//!
//!     let account = client.get_account(&AccountNumber::new("A-1234ABCD")).await?;
//!     println!("Found {} properties", account.properties.len());
//!
//!     for property in &account.properties {
//!         let region = client.get_region_from_postcode(&property.postcode()).await?;
//!         println!("{}, {} ({})", property.address_line_1, property.postcode, region);
//!
//!         for point in &property.electricity_meter_points {
//!             match point.active_agreement() {
//!                 Some(agreement) => println!("  {}: {}", point.mpan, agreement.tariff_code),
//!                 None => println!("  {}: no active tariff", point.mpan),
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Listing Products
//!
//! ```rust,no_run
//! use octopus_energy::OctopusClient;
//! use octopus_energy::api::ProductsQuery;
//!
//! # async fn example() -> octopus_energy::Result<()> {
//! let client = OctopusClient::new("sk_live_abc123")?;
//! let query = ProductsQuery::new().is_green(true).is_business(false);
//!
//! for product in client.get_products(&query).await? {
//!     println!("{}: {} (export: {})", product.code, product.display_name, product.is_export());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::ApiKey;
pub use client::{BlockingOctopusClient, ClientConfig, OctopusClient};
pub use error::{Error, Result};
pub use models::{region_name_from_gsp_code, AccountNumber, Postcode, Region};

/// Prelude module for convenient imports.
///
/// ```rust
/// use octopus_energy::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::ProductsQuery;
    pub use crate::client::{
        BlockingOctopusClient, ClientConfig, OctopusClient, RawResponse, Transport,
        TransportError, TransportRequest,
    };
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AccountNumber, Postcode,
        // Account tree
        Account, Agreement, ElectricityMeterPoint, GasMeterPoint, Meter, Property,
        // Products
        Availability, Link, Product,
        // Regions
        region_name_from_gsp_code, Region,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_creation() {
        let account = AccountNumber::new("A-1234ABCD");
        assert_eq!(account.as_str(), "A-1234ABCD");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(client::DEFAULT_BASE_URL, "https://api.octopus.energy/v1");
    }

    #[test]
    fn test_client_rejects_empty_key() {
        assert!(matches!(OctopusClient::new(""), Err(Error::Config(_))));
    }

    #[test]
    fn test_client_debug_hides_key() {
        let client = OctopusClient::new("sk_live_secret").unwrap();
        assert!(!format!("{:?}", client).contains("sk_live_secret"));
    }
}
