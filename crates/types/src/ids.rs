//! Newtype wrapper for loan record identifiers.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// The identifier printed in document headers, filenames and share summaries.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RecordId(Arc<str>);

impl RecordId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
