//! Ordered label → value mappings handed to report serializers.
//!
//! Label strings and their order are part of the report contract, so the
//! map keeps insertion order and serializes as a JSON object in that order.

use indexmap::IndexMap;
use serde::Serialize;

/// A single reported value. Raw views use the numeric variants; formatted
/// views use [`FieldValue::Text`] (plus the occasional bare integer).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        Self::Integer(u64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Insertion-ordered label → value map.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LabeledMap {
    entries: IndexMap<String, FieldValue>,
}

impl LabeledMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A repeated label replaces the earlier value in place.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.entries.insert(label.into(), value.into());
        self
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.entries.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Order is part of the report contract, so equality is order-sensitive.
impl PartialEq for LabeledMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
