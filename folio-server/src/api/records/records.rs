//! Record REST API handlers
//!
//! The four verbs of /api/data, each a validate-then-store pass-through.
//! Validation happens before any store call; the repository itself enforces
//! no schema.

use crate::{
    ApiError, ApiResult, CreateRecordRequest, CreateRecordResponse, DeleteRecordRequest,
    DeleteRecordResponse, RecordDto, UpdateRecordRequest, UpdateRecordResponse,
};

use crate::app_state::AppState;

use folio_core::{ProjectRecord, validation};
use folio_db::RecordRepository;

use axum::{Json, extract::State, http::StatusCode};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/data
///
/// List every record, in store-native order.
pub async fn list_records(State(state): State<AppState>) -> ApiResult<Json<Vec<RecordDto>>> {
    let repo = RecordRepository::new(state.pool.clone());
    let records = repo.find_all().await?;

    Ok(Json(records.into_iter().map(RecordDto::from).collect()))
}

/// POST /api/data
///
/// Insert a new record and return it as the store persisted it.
pub async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> ApiResult<(StatusCode, Json<CreateRecordResponse>)> {
    let record = match req.id.filter(|id| !id.is_empty()) {
        Some(id) => ProjectRecord::with_id(id, req.fields),
        None => ProjectRecord::new(req.fields),
    };

    let repo = RecordRepository::new(state.pool.clone());
    repo.insert(&record).await?;

    // Read the record back under its key. A miss here is a distinct failure
    // from the insert itself, though both surface as a server error.
    let inserted = repo
        .find_by_id(&record.id)
        .await?
        .ok_or_else(|| ApiError::internal("Failed to read back inserted record"))?;

    log::info!("Created record {}", inserted.id);

    Ok((
        StatusCode::CREATED,
        Json(CreateRecordResponse {
            message: "Record created successfully".to_string(),
            data: inserted.into(),
        }),
    ))
}

/// PATCH /api/data
///
/// Partial merge update: only the supplied fields change.
pub async fn update_record(
    State(state): State<AppState>,
    Json(req): Json<UpdateRecordRequest>,
) -> ApiResult<Json<UpdateRecordResponse>> {
    let id = validation::require_identity_key(req.id.as_deref())?;
    validation::require_update_fields(&req.fields)?;

    let repo = RecordRepository::new(state.pool.clone());
    let updated = repo
        .update(&id, req.fields)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Record {} not found", id)))?;

    log::info!("Updated record {}", updated.id);

    Ok(Json(UpdateRecordResponse {
        message: "Record updated successfully".to_string(),
    }))
}

/// DELETE /api/data
///
/// Remove a record by identity key and echo the key back.
pub async fn delete_record(
    State(state): State<AppState>,
    Json(req): Json<DeleteRecordRequest>,
) -> ApiResult<Json<DeleteRecordResponse>> {
    let id = validation::require_identity_key(req.id.as_deref())?;

    let repo = RecordRepository::new(state.pool.clone());
    let removed = repo.delete(&id).await?;

    if removed == 0 {
        return Err(ApiError::not_found(format!("Record {} not found", id)));
    }

    log::info!("Deleted record {}", id);

    Ok(Json(DeleteRecordResponse {
        message: "Record deleted".to_string(),
        id,
    }))
}
