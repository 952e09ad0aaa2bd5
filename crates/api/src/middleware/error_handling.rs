//! # Error Handling Middleware
//!
//! Maps schedule errors to HTTP status codes and a JSON body of the form
//! `{ "error": "<message>" }`, so every endpoint fails the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use academy_core::errors::ScheduleError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use academy_api::middleware::error_handling::AppError;
/// use academy_core::errors::ScheduleError;
///
/// async fn handler(text: String) -> Result<Json<String>, AppError> {
///     if text.trim().is_empty() {
///         return Err(AppError(ScheduleError::Validation("empty text".to_string())));
///     }
///     Ok(Json(text))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ScheduleError::ModelResponse(_) => StatusCode::BAD_GATEWAY,
            ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `ScheduleResult` inside handlers.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Unexpected failures surface as internal errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Internal(err))
    }
}

/// Maps a ScheduleError straight to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
