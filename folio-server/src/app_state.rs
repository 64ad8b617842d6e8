use folio_config::ApiConfig;

use sqlx::SqlitePool;

/// Shared application state, injected into every handler.
///
/// The pool is opened once at startup; handlers borrow connections from it
/// instead of opening and closing their own per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub api: ApiConfig,
}
