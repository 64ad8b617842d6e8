use serde::Deserialize;
use serde_json::{Map, Value};

/// Partial update: the identity key plus only the fields to replace.
#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
