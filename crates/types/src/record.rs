//! The loan record as handed over by the data-access layer.
//!
//! A record is an open key/value map with no enforced schema. Nested objects
//! (e.g. the joined `banks` row) are reached with dotted keys such as
//! `banks.name`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanRecord(Map<String, Value>);

impl LoanRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value. Anything other than an object yields an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Resolves a key, descending into nested objects on `.` separators.
    ///
    /// A literal key containing a dot takes precedence over the nested path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Some(v) = self.0.get(key) {
            return Some(v);
        }
        let mut parts = key.split('.');
        let mut current = self.0.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// Returns the value of the first candidate key that holds something.
    ///
    /// A falsy candidate (`0`, `false`) yields to a later truthy one and is
    /// only returned when no candidate is truthy.
    pub fn first_present<'a>(&'a self, keys: &[&str]) -> Option<&'a Value> {
        let mut falsy = None;
        for value in keys.iter().filter_map(|k| self.get(k)) {
            if is_truthy(value) {
                return Some(value);
            }
            if falsy.is_none() && is_present(value) {
                falsy = Some(value);
            }
        }
        falsy
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for LoanRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// `null` and blank strings count as absent.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Present and not `0` or `false`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        other => is_present(other),
    }
}
