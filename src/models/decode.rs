//! Field-by-field decoding of API JSON into validated records.
//!
//! Each record implements [`Decode`] by pulling its fields through a
//! [`Fields`] reader. Failures name the dotted path of the offending field,
//! e.g. `properties[1].electricity_meter_points[0].agreements[2].valid_from`.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A record that can be decoded from one JSON value.
pub trait Decode: Sized {
    /// Decode `value`, reporting failures relative to `path`.
    fn decode_at(value: &Value, path: &str) -> Result<Self>;

    /// Decode a top-level value.
    fn decode(value: &Value) -> Result<Self> {
        Self::decode_at(value, "")
    }
}

/// Decode every element of a JSON array, failing on the first bad element.
pub fn decode_all<D: Decode>(values: &[Value], path: &str) -> Result<Vec<D>> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| D::decode_at(value, &format!("{path}[{i}]")))
        .collect()
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse an ISO-8601 timestamp that carries an explicit UTC offset.
///
/// Accepts RFC 3339 plus the minute-precision form `2024-04-01T00:00+01:00`.
/// Naive timestamps are rejected: without an offset there is no instant to
/// compare against the current time.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Typed access to the fields of one JSON object.
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(value: &'a Value, path: &'a str) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(Self { object, path }),
            other => Err(Error::validation(
                display_path(path),
                format!("expected an object, found {}", kind(other)),
            )),
        }
    }

    fn path_of(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    fn mismatch(&self, name: &str, expected: &str, found: &Value) -> Error {
        Error::validation(
            self.path_of(name),
            format!("expected {expected}, found {}", kind(found)),
        )
    }

    fn required(&self, name: &str) -> Result<&'a Value> {
        self.object
            .get(name)
            .ok_or_else(|| Error::validation(self.path_of(name), "missing field"))
    }

    /// Absent and `null` both read as `None`.
    fn optional(&self, name: &str) -> Option<&'a Value> {
        self.object.get(name).filter(|v| !v.is_null())
    }

    pub(crate) fn string(&self, name: &str) -> Result<String> {
        let value = self.required(name)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch(name, "a string", value))
    }

    pub(crate) fn string_or_default(&self, name: &str) -> Result<String> {
        match self.optional(name) {
            None => Ok(String::new()),
            Some(value) => value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| self.mismatch(name, "a string", value)),
        }
    }

    pub(crate) fn bool(&self, name: &str) -> Result<bool> {
        let value = self.required(name)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(name, "a boolean", value))
    }

    pub(crate) fn bool_or(&self, name: &str, default: bool) -> Result<bool> {
        match self.optional(name) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.mismatch(name, "a boolean", value)),
        }
    }

    pub(crate) fn u64(&self, name: &str) -> Result<u64> {
        let value = self.required(name)?;
        value
            .as_u64()
            .ok_or_else(|| self.mismatch(name, "a non-negative integer", value))
    }

    pub(crate) fn optional_u32(&self, name: &str) -> Result<Option<u32>> {
        match self.optional(name) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| self.mismatch(name, "a non-negative integer", value)),
        }
    }

    pub(crate) fn timestamp(&self, name: &str) -> Result<DateTime<Utc>> {
        let value = self.required(name)?;
        self.parse_timestamp_field(name, value)
    }

    pub(crate) fn optional_timestamp(&self, name: &str) -> Result<Option<DateTime<Utc>>> {
        self.optional(name)
            .map(|value| self.parse_timestamp_field(name, value))
            .transpose()
    }

    fn parse_timestamp_field(&self, name: &str, value: &Value) -> Result<DateTime<Utc>> {
        let raw = value
            .as_str()
            .ok_or_else(|| self.mismatch(name, "a timestamp string", value))?;
        parse_timestamp(raw).ok_or_else(|| {
            Error::validation(
                self.path_of(name),
                format!("expected an ISO-8601 timestamp with a UTC offset, found {raw:?}"),
            )
        })
    }

    pub(crate) fn list<D: Decode>(&self, name: &str) -> Result<Vec<D>> {
        let value = self.required(name)?;
        self.decode_list(name, value)
    }

    pub(crate) fn list_or_empty<D: Decode>(&self, name: &str) -> Result<Vec<D>> {
        match self.optional(name) {
            None => Ok(Vec::new()),
            Some(value) => self.decode_list(name, value),
        }
    }

    fn decode_list<D: Decode>(&self, name: &str, value: &Value) -> Result<Vec<D>> {
        let items = value
            .as_array()
            .ok_or_else(|| self.mismatch(name, "an array", value))?;
        decode_all(items, &self.path_of(name))
    }

    /// Raw array access for envelopes such as `{"results": [...]}`.
    /// Absent or `null` reads as empty.
    pub(crate) fn raw_array(&self, name: &str) -> Result<&'a [Value]> {
        match self.optional(name) {
            None => Ok(&[]),
            Some(value) => value
                .as_array()
                .map(Vec::as_slice)
                .ok_or_else(|| self.mismatch(name, "an array", value)),
        }
    }

    pub(crate) fn optional_string(&self, name: &str) -> Result<Option<String>> {
        self.optional(name)
            .map(|value| {
                value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.mismatch(name, "a string", value))
            })
            .transpose()
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}
