use crate::domain::model::ErrorResponse;
use crate::utils::error::{ActivityError, ErrorKind};
use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// API error type that converts to `{"detail": ...}` responses
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(detail),
        }
    }

    pub fn missing_query_param(name: &str) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Missing required query parameter: {}", name),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.body.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// 路徑或查詢字串無法解析時，同樣回傳 `{"detail"}`，狀態碼用 422
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => ApiError::new(StatusCode::NOT_FOUND, err.to_string()),
            // 重複報名沿用 400，而不是 409
            ErrorKind::Conflict => ApiError::new(StatusCode::BAD_REQUEST, err.to_string()),
            ErrorKind::Config | ErrorKind::Internal => {
                tracing::error!(error = %err, "request failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
