use crate::RecordDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateRecordResponse {
    pub message: String,
    /// The record as the store persisted it, including the assigned key
    pub data: RecordDto,
}
