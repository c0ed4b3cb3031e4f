//! Feature and attribute model.
//!
//! Attribute access uses an explicit [`AttributeValue::Absent`] marker
//! instead of scattered null/empty-string checks, so row construction and
//! the name-fallback rule consume one uniform contract.

use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashMap;

/// A planar point, used for feature centroids and link export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One attribute value of a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    /// The attribute exists in the schema but carries no value for this feature.
    Absent,
}

impl AttributeValue {
    /// Whether this value is the absent marker.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Textual form of the value, `None` when absent.
    ///
    /// Numbers are formatted with their shortest round-trip representation,
    /// so numeric identifier attributes compare stably as strings.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(format!("{n}")),
            Self::Absent => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A geographic feature: an attribute bag plus an optional centroid.
///
/// This is the engine-side view of an entity fetched from the feature
/// store; geometry is reduced to the centroid the link export needs.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    attributes: FxHashMap<String, AttributeValue>,
    centroid: Option<Point>,
}

impl Feature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute insertion.
    pub fn with_attribute(mut self, key: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Builder-style centroid attachment.
    pub fn with_centroid(mut self, centroid: Point) -> Self {
        self.centroid = Some(centroid);
        self
    }

    /// Look up an attribute. Missing keys read as [`AttributeValue::Absent`].
    pub fn attribute(&self, key: &str) -> &AttributeValue {
        self.attributes.get(key).unwrap_or(&AttributeValue::Absent)
    }

    /// Textual form of an attribute, `None` when absent.
    pub fn text(&self, key: &str) -> Option<String> {
        self.attribute(key).as_text()
    }

    pub fn centroid(&self) -> Option<Point> {
        self.centroid
    }
}
