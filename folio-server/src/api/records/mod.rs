pub mod create_record_request;
pub mod create_record_response;
pub mod delete_record_request;
pub mod delete_record_response;
pub mod record_dto;
pub mod records;
pub mod update_record_request;
pub mod update_record_response;
