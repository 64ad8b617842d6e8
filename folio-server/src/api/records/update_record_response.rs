use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateRecordResponse {
    pub message: String,
}
