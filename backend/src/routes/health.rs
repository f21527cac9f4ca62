use aide::axum::IntoApiResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    status: String,
    /// Server time when the check was answered
    #[schemars(with = "String")]
    timestamp: DateTime<Utc>,
}

/// Health check endpoint
///
/// Returns `ok` and the current server time. The check does not touch the
/// quiz store.
#[allow(clippy::unused_async)]
pub async fn handler() -> impl IntoApiResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}
