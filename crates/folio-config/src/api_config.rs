use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the browser client is served from. When set, CORS is locked
    /// to this origin; when unset, any origin is allowed (development mode).
    pub base_url: Option<String>,
}
