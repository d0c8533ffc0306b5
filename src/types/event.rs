//! Event records consumed by the ledger

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An already-deserialized event as seen by the verification core.
///
/// Only two things matter here: the identifier, assumed unique per logical
/// event instance, and the string-keyed attribute map in which a partition
/// key may be carried. Attribute values are JSON values because upstream
/// producers are free to attach non-string extensions; the core only ever
/// looks up the partition-key attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl EventRecord {
    /// Create an event with no attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    /// Attach an attribute (builder style)
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute by name
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}
