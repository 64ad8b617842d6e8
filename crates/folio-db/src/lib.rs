pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::record_repository::RecordRepository;
