//! Data models for the Octopus Energy API.
//!
//! - [`primitives`] - Typed identifiers (`AccountNumber`, `Postcode`)
//! - [`decode`] - Field-checked decoding from JSON
//! - [`account`] - Account, property, meter point and agreement records
//! - [`product`] - Product records
//! - [`region`] - GSP group code to region mapping

pub mod primitives;
pub mod decode;
pub mod account;
pub mod product;
pub mod region;

pub use primitives::*;
pub use decode::{decode_all, Decode};
pub use account::*;
pub use product::*;
pub use region::*;
