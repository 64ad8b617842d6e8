use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteRecordResponse {
    pub message: String,
    /// Deleted identity key, echoed back to the caller
    #[serde(rename = "_id")]
    pub id: String,
}
