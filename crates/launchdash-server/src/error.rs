use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use launchdash_core::LaunchDashError;
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<LaunchDashError> for AppError {
    fn from(err: LaunchDashError) -> Self {
        match err {
            LaunchDashError::InvalidRange { .. } => AppError::BadRequest(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_is_bad_request() {
        let err = AppError::from(LaunchDashError::InvalidRange {
            low: 10.0,
            high: 1.0,
        });
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = AppError::from(LaunchDashError::EmptyDataset);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
