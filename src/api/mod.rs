//! API service modules for Octopus Energy endpoints.
//!
//! Each service covers one endpoint family and is obtained from
//! [`OctopusClient`](crate::OctopusClient).

mod accounts;
mod industry;
mod products;

pub use accounts::AccountsService;
pub use industry::IndustryService;
pub use products::{ProductsQuery, ProductsService, DEFAULT_BRAND};
