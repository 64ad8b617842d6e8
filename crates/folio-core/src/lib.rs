pub mod models;
pub mod validation;


pub use models::project_record::{IDENTITY_KEY, ProjectRecord};
pub use validation::{
    ValidationError, require_identity_key, require_update_fields,
};
