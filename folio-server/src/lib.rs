pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    records::{
        create_record_request::CreateRecordRequest,
        create_record_response::CreateRecordResponse,
        delete_record_request::DeleteRecordRequest,
        delete_record_response::DeleteRecordResponse,
        record_dto::RecordDto,
        records::{create_record, delete_record, list_records, update_record},
        update_record_request::UpdateRecordRequest,
        update_record_response::UpdateRecordResponse,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
