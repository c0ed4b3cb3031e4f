//! Attribute schema for one side of a comparison.

use serde::{Deserialize, Serialize};

/// Names the identifier and name attributes of a feature collection.
///
/// The reference dataset and the candidate dataset each carry their own
/// schema, since attribute naming differs between sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Attribute holding the unique identifier. Required on every feature.
    pub key: String,
    /// Attribute holding the display name. May be absent on a feature.
    pub name: String,
}

impl EntitySchema {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
        }
    }
}
