//! Portfolio project record - a schemaless document with a stable identity key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Wire name of the identity key, matching what clients send and receive.
pub const IDENTITY_KEY: &str = "_id";

/// A portfolio project record. The store enforces nothing about the field
/// map: clients conventionally send `id`, `title`, `img`, `data_img`,
/// `desc`, `link` and `git`, but any JSON object is accepted as-is.
/// Only the identity key is managed here and it never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProjectRecord {
    /// Create a new record with a freshly assigned identity key
    pub fn new(fields: Map<String, Value>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// Create a record with a caller-supplied identity key
    pub fn with_id(id: String, fields: Map<String, Value>) -> Self {
        let mut record = Self {
            id,
            fields: Map::new(),
        };
        record.merge(fields);
        record
    }

    /// Partial merge: replace only the supplied fields, leave the rest
    /// untouched. The identity key is immutable and is skipped even if the
    /// caller smuggled one into the map.
    pub fn merge(&mut self, fields: Map<String, Value>) {
        for (key, value) in fields {
            if key == IDENTITY_KEY {
                continue;
            }
            self.fields.insert(key, value);
        }
    }
}
