// HTTP request handlers
use crate::application::dashboard_service::AggregationError;
use crate::application::data_source::{Credential, FetchError};
use crate::infrastructure::json_mapper::snapshot_to_view;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Aggregate and return the dashboard for the calling account
pub async fn get_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let Some(credential) = bearer_credential(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "missing bearer credential"})),
        )
            .into_response();
    };

    match state
        .dashboard_service
        .get_dashboard(&credential, Utc::now())
        .await
    {
        Ok(snapshot) => Json(snapshot_to_view(snapshot, &state.api_base)).into_response(),
        Err(error) => {
            tracing::error!("dashboard aggregation failed: {}", error);
            (
                error_status(&error),
                Json(json!({"error": error.to_string()})),
            )
                .into_response()
        }
    }
}

fn bearer_credential(headers: &HeaderMap) -> Option<Credential> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(Credential::new)
}

/// A rejected credential is the caller's problem; everything else is a
/// failed upstream dependency.
fn error_status(error: &AggregationError) -> StatusCode {
    match error.source {
        FetchError::Unauthorized => StatusCode::UNAUTHORIZED,
        FetchError::NotFound | FetchError::Network(_) | FetchError::Malformed(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}
