use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeleteRecordRequest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}
