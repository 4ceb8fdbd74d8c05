//! Record Module
//!
//! Schema-free representation of one wildfire-incident observation.
//!
//! ## Responsibilities
//! - Hold arbitrary field → JSON value mappings exactly as loaded
//! - Serialize back out with the source key order intact
//! - Offer typed reads (`integer`, `text`) for the filter predicates
//!
//! ## Value Coercion
//! ```text
//! ┌──────────────┬────────────────────┬──────────────────────┐
//! │ JSON value   │ integer(field)     │ text(field)          │
//! ├──────────────┼────────────────────┼──────────────────────┤
//! │ 2023         │ Some(2023)         │ Some("2023")         │
//! │ 2023.0       │ Some(2023)         │ Some("2023.0")       │
//! │ "2023"       │ None               │ Some("2023")         │
//! │ true         │ None               │ Some("true")         │
//! │ null         │ None               │ None                 │
//! │ [..] / {..}  │ None               │ Some(compact JSON)   │
//! │ (missing)    │ None               │ None                 │
//! └──────────────┴────────────────────┴──────────────────────┘
//! ```

pub mod fields;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One wildfire-incident observation
///
/// Fields are not schema-enforced: any record may lack any field, and
/// unknown fields are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field insertion
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Raw value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field value as an integer
    ///
    /// Floats count only when they hold an exact integral value.
    pub fn integer(&self, field: &str) -> Option<i64> {
        match self.0.get(field)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    // i64::MAX as f64 rounds up to 2^63, which is out of range
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            _ => None,
        }
    }

    /// Field value coerced to text
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.0.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in source order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
