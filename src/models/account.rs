//! Account, property and meter-point models.
//!
//! An [`Account`] owns its [`Property`] list, each property owns its meter
//! points, and each meter point owns its meters and tariff agreements.
//!
//! These records are decoded through [`Decode`] rather than
//! `serde::Deserialize` so that failures name the full field path.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::decode::{Decode, Fields};
use super::primitives::{AccountNumber, Postcode};
use crate::Result;

/// A time-bounded tariff assignment to a meter point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agreement {
    /// Tariff code, e.g. `E-1R-AGILE-24-10-01-C`
    pub tariff_code: String,
    /// Start of the agreement
    pub valid_from: DateTime<Utc>,
    /// End of the agreement; `None` means open-ended (rolling)
    pub valid_to: Option<DateTime<Utc>>,
}

impl Agreement {
    /// Whether the agreement is in force right now.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// Whether the agreement is in force at `now`.
    ///
    /// An agreement ending exactly at `now` is no longer active.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.valid_to {
            None => true,
            Some(valid_to) => valid_to > now,
        }
    }
}

impl Decode for Agreement {
    fn decode_at(value: &Value, path: &str) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            tariff_code: fields.string("tariff_code")?,
            valid_from: fields.timestamp("valid_from")?,
            valid_to: fields.optional_timestamp("valid_to")?,
        })
    }
}

/// A physical meter installed at a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meter {
    /// Meter serial number
    pub serial_number: String,
}

impl Decode for Meter {
    fn decode_at(value: &Value, path: &str) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            serial_number: fields.string("serial_number")?,
        })
    }
}

/// An electricity connection point, identified by its MPAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectricityMeterPoint {
    /// Meter Point Administration Number
    pub mpan: String,
    /// Meters on this connection, in API order
    pub meters: Vec<Meter>,
    /// Tariff agreements, in API order
    pub agreements: Vec<Agreement>,
    /// Whether this point exports generation to the grid
    pub is_export: bool,
}

impl ElectricityMeterPoint {
    /// The first agreement that is currently active, if any.
    pub fn active_agreement(&self) -> Option<&Agreement> {
        self.agreements.iter().find(|a| a.is_active())
    }
}

impl Decode for ElectricityMeterPoint {
    fn decode_at(value: &Value, path: &str) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            mpan: fields.string("mpan")?,
            meters: fields.list("meters")?,
            agreements: fields.list("agreements")?,
            is_export: fields.bool_or("is_export", false)?,
        })
    }
}

/// A gas connection point, identified by its MPRN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasMeterPoint {
    /// Meter Point Reference Number
    pub mprn: String,
    /// Meters on this connection, in API order
    pub meters: Vec<Meter>,
    /// Tariff agreements, in API order
    pub agreements: Vec<Agreement>,
}

impl GasMeterPoint {
    /// The first agreement that is currently active, if any.
    pub fn active_agreement(&self) -> Option<&Agreement> {
        self.agreements.iter().find(|a| a.is_active())
    }
}

impl Decode for GasMeterPoint {
    fn decode_at(value: &Value, path: &str) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            mprn: fields.string("mprn")?,
            meters: fields.list("meters")?,
            agreements: fields.list("agreements")?,
        })
    }
}

/// A supply address on an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Numeric property id
    pub id: u64,
    /// First line of the address
    pub address_line_1: String,
    /// Postcode of the address
    pub postcode: String,
    /// Electricity connections (possibly empty)
    pub electricity_meter_points: Vec<ElectricityMeterPoint>,
    /// Gas connections (possibly empty)
    pub gas_meter_points: Vec<GasMeterPoint>,
}

impl Property {
    /// The property's postcode as a typed value for region lookups.
    pub fn postcode(&self) -> Postcode {
        Postcode::new(&self.postcode)
    }
}

impl Decode for Property {
    fn decode_at(value: &Value, path: &str) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            id: fields.u64("id")?,
            address_line_1: fields.string("address_line_1")?,
            postcode: fields.string("postcode")?,
            electricity_meter_points: fields.list_or_empty("electricity_meter_points")?,
            gas_meter_points: fields.list_or_empty("gas_meter_points")?,
        })
    }
}

/// The top-level account with every property and meter on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Account number
    pub number: String,
    /// Properties, in API order
    pub properties: Vec<Property>,
}

impl Account {
    /// Get the account number as a strongly-typed value.
    pub fn account_number(&self) -> AccountNumber {
        AccountNumber::new(&self.number)
    }
}

impl Decode for Account {
    fn decode_at(value: &Value, path: &str) -> Result<Self> {
        let fields = Fields::new(value, path)?;
        Ok(Self {
            number: fields.string("number")?,
            properties: fields.list("properties")?,
        })
    }
}
