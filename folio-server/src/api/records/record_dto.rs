use folio_core::ProjectRecord;

use serde::Serialize;
use serde_json::{Map, Value};

/// Record DTO for JSON serialization: identity key plus the flat field map,
/// exactly the document shape the admin client stores and reads.
#[derive(Debug, Serialize)]
pub struct RecordDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl From<ProjectRecord> for RecordDto {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            fields: record.fields,
        }
    }
}
