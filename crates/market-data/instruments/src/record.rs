//! Instrument records decoded from a JSON instrument list
//!
//! Field lookup is tolerant: a missing key, a JSON `null`, or an array
//! element that is not an object all yield an absent field instead of an
//! error. Present values are kept untyped and printed as-is.

use crate::error::{TableError, TableResult};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One row of the instrument list
///
/// Keys other than the three below are ignored. A JSON `null` deserializes
/// to `None` like a missing key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstrumentRecord {
    /// Trading symbol (e.g., "NIFTY2610625300CE")
    pub symbol: Option<Value>,

    /// Venue instrument token (e.g., 10350338)
    pub instrument_token: Option<Value>,

    /// Exchange token (e.g., 40431)
    pub exchange_token: Option<Value>,
}

impl InstrumentRecord {
    /// Extract a record from one array element
    pub fn from_value(value: Value) -> Self {
        match value {
            // Every field accepts any JSON value, so an object always decodes
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Number of the three fields that are absent
    pub fn absent_fields(&self) -> usize {
        [&self.symbol, &self.instrument_token, &self.exchange_token]
            .iter()
            .filter(|field| field.is_none())
            .count()
    }
}

/// Decode a JSON instrument list into records, preserving array order
pub fn decode_records(input: &str) -> TableResult<Vec<InstrumentRecord>> {
    let document: Value = serde_json::from_str(input)?;

    match document {
        Value::Array(items) => Ok(items.into_iter().map(InstrumentRecord::from_value).collect()),
        other => Err(TableError::processing(format!(
            "expected a JSON array of instrument records, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Display adapter for a single table cell
///
/// Honors width and alignment flags, so `{:<20}` pads the rendered text.
pub struct Cell<'a> {
    value: Option<&'a Value>,
    absent_marker: &'a str,
}

impl<'a> Cell<'a> {
    /// Wrap a field with the marker printed when it is absent
    pub const fn new(value: Option<&'a Value>, absent_marker: &'a str) -> Self {
        Self {
            value,
            absent_marker,
        }
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            None => f.pad(self.absent_marker),
            Some(Value::String(text)) => f.pad(text),
            Some(other) => f.pad(&other.to_string()),
        }
    }
}
