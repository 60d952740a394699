//! Activity API endpoints

use crate::app::error::ApiError;
use crate::app::AppState;
use crate::domain::model::{Directory, HealthResponse, MessageResponse};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: Option<String>,
}

/// List all activities
///
/// GET /activities
#[instrument(skip(state), level = "debug")]
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Directory>, ApiError> {
    let activities = state.store.list().await?;
    Ok(Json(activities))
}

/// Sign a student up for an activity
///
/// POST /activities/{activity_name}/signup?email=...
#[instrument(skip_all, level = "info")]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = query
        .email
        .ok_or_else(|| ApiError::missing_query_param("email"))?;

    if let Err(e) = state.store.enroll(&activity_name, &email).await {
        tracing::warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
        return Err(e.into());
    }

    tracing::info!(activity = %activity_name, email = %email, "✅ signed up");
    Ok(Json(MessageResponse::signed_up(&email, &activity_name)))
}

/// Remove a participant from an activity
///
/// DELETE /activities/{activity_name}/participants/{email}
#[instrument(skip_all, level = "info")]
pub async fn remove_participant(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path((activity_name, email)) = path?;

    if let Err(e) = state.store.withdraw(&activity_name, &email).await {
        tracing::warn!(activity = %activity_name, email = %email, "removal rejected: {}", e);
        return Err(e.into());
    }

    tracing::info!(activity = %activity_name, email = %email, "🗑️ removed");
    Ok(Json(MessageResponse::removed(&email, &activity_name)))
}

/// GET /health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        activities: state.store.count().await?,
    }))
}
