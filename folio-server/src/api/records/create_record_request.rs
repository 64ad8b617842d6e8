use serde::Deserialize;
use serde_json::{Map, Value};

/// Create takes an arbitrary field mapping. An identity key is normally
/// assigned by the store, but a caller-supplied one is honored; a duplicate
/// then surfaces as a constraint error.
#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
