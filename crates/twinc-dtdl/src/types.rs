//! Newtype wrapper for DTDL primitive schema tags.
//!
//! Serializes/deserializes as a plain string; the empty string means the
//! schema carried no primitive tag at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// A DTDL primitive schema tag (`integer`, `string`, `boolean`, `double`).
///
/// Stored as a string rather than a closed enum: interface documents in the
/// wild carry tags outside the supported set, and schema resolution is a
/// total function that must not reject them. An empty value means the source
/// schema had no primitive tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimitiveType(String);

impl PrimitiveType {
    pub const INTEGER: &'static str = "integer";
    pub const STRING: &'static str = "string";
    pub const BOOLEAN: &'static str = "boolean";
    pub const DOUBLE: &'static str = "double";

    /// Create a new tag from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Return the inner tag as a slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if no primitive tag was present in the source schema.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the tag is one of the four supported DTDL primitives.
    pub fn is_supported(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::INTEGER | Self::STRING | Self::BOOLEAN | Self::DOUBLE
        )
    }
}

impl Deref for PrimitiveType {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PrimitiveType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PrimitiveType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl From<String> for PrimitiveType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PrimitiveType {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
