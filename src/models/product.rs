//! Energy product models.
//!
//! Decoded through [`Decode`] rather than `serde::Deserialize` so that
//! failures name the full field path.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::decode::{Decode, Fields};
use crate::Result;

/// A hypermedia link attached to a product. Never dereferenced by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// HTTP method, e.g. `GET`
    pub method: String,
    /// Relation name, e.g. `self`
    pub rel: String,
}

impl Decode for Link {
    fn decode_at(value: &Value, path: &str) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            href: fields.string("href")?,
            method: fields.string("method")?,
            rel: fields.string("rel")?,
        })
    }
}

/// The period during which a product can be signed up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// First instant the product is available
    #[serde(rename = "available_from")]
    pub from: Option<DateTime<Utc>>,
    /// Instant the product is withdrawn; `None` means still on sale
    #[serde(rename = "available_to")]
    pub to: Option<DateTime<Utc>>,
}

impl Availability {
    /// Whether `instant` falls inside the window. Missing ends are unbounded.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| from <= instant) && self.to.map_or(true, |to| instant < to)
    }
}

/// An energy product (a family of tariffs) offered by a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Product code, e.g. `AGILE-24-10-01`
    pub code: String,
    /// `IMPORT` or `EXPORT`
    pub direction: String,
    /// Long name
    pub full_name: String,
    /// Short name shown to customers
    pub display_name: String,
    /// Marketing description
    pub description: String,
    /// Price varies over time
    pub is_variable: bool,
    /// Renewable supply
    pub is_green: bool,
    /// Price tracks wholesale rates
    pub is_tracker: bool,
    /// Prepayment meters only
    pub is_prepay: bool,
    /// Business customers only
    pub is_business: bool,
    /// Restricted availability
    pub is_restricted: bool,
    /// Contract length in months; `None` for no fixed term
    pub term: Option<u32>,
    /// When the product is on sale
    #[serde(flatten)]
    pub availability: Availability,
    /// Related resources
    pub links: Vec<Link>,
    /// Brand offering the product, e.g. `OCTOPUS_ENERGY`
    pub brand: String,
}

impl Product {
    /// Whether this is an export (generation) product.
    pub fn is_export(&self) -> bool {
        self.direction.eq_ignore_ascii_case("EXPORT")
    }
}

impl Decode for Product {
    fn decode_at(value: &Value, path: &str) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            code: fields.string("code")?,
            direction: fields.string("direction")?,
            full_name: fields.string("full_name")?,
            display_name: fields.string("display_name")?,
            description: fields.string("description")?,
            is_variable: fields.bool("is_variable")?,
            is_green: fields.bool("is_green")?,
            is_tracker: fields.bool("is_tracker")?,
            is_prepay: fields.bool("is_prepay")?,
            is_business: fields.bool("is_business")?,
            is_restricted: fields.bool("is_restricted")?,
            term: fields.optional_u32("term")?,
            availability: Availability {
                from: fields.optional_timestamp("available_from")?,
                to: fields.optional_timestamp("available_to")?,
            },
            links: fields.list("links")?,
            brand: fields.string("brand")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::TimeZone;
    use serde_json::json;

    fn agile() -> Value {
        json!({
            "code": "AGILE-24-10-01",
            "direction": "IMPORT",
            "full_name": "Agile Octopus October 2024 v1",
            "display_name": "Agile Octopus",
            "description": "With Agile Octopus, you get access to half-hourly energy prices.",
            "is_variable": true,
            "is_green": true,
            "is_tracker": false,
            "is_prepay": false,
            "is_business": false,
            "is_restricted": false,
            "term": 12,
            "available_from": "2024-10-01T00:00:00+01:00",
            "available_to": null,
            "links": [{
                "href": "https://api.octopus.energy/v1/products/AGILE-24-10-01/",
                "method": "GET",
                "rel": "self"
            }],
            "brand": "OCTOPUS_ENERGY"
        })
    }

    #[test]
    fn test_decode_product() {
        let product = Product::decode(&agile()).unwrap();
        assert_eq!(product.code, "AGILE-24-10-01");
        assert_eq!(product.term, Some(12));
        assert!(product.is_variable);
        assert!(product.availability.to.is_none());
        assert_eq!(product.links[0].rel, "self");
        assert!(!product.is_export());
    }

    #[test]
    fn test_is_export_is_derived() {
        let mut value = agile();
        value["direction"] = json!("export");
        // a stray input flag never wins over direction
        value["is_export"] = json!(false);
        assert!(Product::decode(&value).unwrap().is_export());

        value["direction"] = json!("IMPORT");
        value["is_export"] = json!(true);
        assert!(!Product::decode(&value).unwrap().is_export());
    }

    #[test]
    fn test_flags_are_required() {
        let mut value = agile();
        value.as_object_mut().unwrap().remove("is_tracker");
        assert!(matches!(
            Product::decode(&value),
            Err(Error::Validation { ref path, .. }) if path == "is_tracker"
        ));
    }

    #[test]
    fn test_null_term() {
        let mut value = agile();
        value["term"] = Value::Null;
        assert_eq!(Product::decode(&value).unwrap().term, None);
    }

    #[test]
    fn test_reencode_flattens_availability() {
        let product = Product::decode(&agile()).unwrap();
        let encoded = serde_json::to_value(&product).unwrap();
        assert!(encoded.get("available_from").is_some());
        assert!(encoded.get("availability").is_none());
        assert_eq!(Product::decode(&encoded).unwrap(), product);
    }

    #[test]
    fn test_availability_window() {
        let window = Availability {
            from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        };
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap()));
    }
}
