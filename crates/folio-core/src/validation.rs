//! Request validation, kept as a step in front of the store calls rather
//! than inside them so the repository stays a plain pass-through.

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing record _id: {message} {location}")]
    MissingIdentityKey {
        message: String,
        location: ErrorLocation,
    },

    #[error("No update data provided {location}")]
    EmptyUpdate { location: ErrorLocation },
}

pub type Result<T> = StdResult<T, ValidationError>;

/// Require a non-empty identity key on mutation requests.
#[track_caller]
pub fn require_identity_key(id: Option<&str>) -> Result<String> {
    match id {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ValidationError::MissingIdentityKey {
            message: "record _id is required for this operation".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Require at least one field in a partial update payload.
#[track_caller]
pub fn require_update_fields(fields: &Map<String, Value>) -> Result<()> {
    if fields.is_empty() {
        return Err(ValidationError::EmptyUpdate {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
