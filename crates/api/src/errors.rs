use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rpz_exporter_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::Metrics(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),

            DomainError::QueueClosed => (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string()),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
