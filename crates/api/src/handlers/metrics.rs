use crate::{errors::ApiError, state::AppState};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use tracing::{error, instrument};

const TEXT_FORMAT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

#[instrument(skip(state), name = "api_get_metrics")]
pub async fn get_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state.export_metrics.execute().map_err(|e| {
        error!(error = %e, "Failed to encode metrics");
        ApiError(e)
    })?;

    Ok(([(header::CONTENT_TYPE, TEXT_FORMAT_CONTENT_TYPE)], body))
}
