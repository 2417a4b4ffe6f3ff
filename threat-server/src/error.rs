//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use threatwatch_core::constants::{
    ERROR_ALL_SOURCES_FAILED, ERROR_IP_EMPTY, ERROR_IP_FORMAT, ERROR_RATE_LIMIT,
};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Validation errors
    #[error("{}", ERROR_IP_EMPTY)]
    MissingIp,
    #[error("{}", ERROR_IP_FORMAT)]
    InvalidIp,
    #[error("{0}")]
    InvalidQuery(String),

    // Upstream errors
    #[error("{}", ERROR_RATE_LIMIT)]
    RateLimited,
    #[error("{}", ERROR_ALL_SOURCES_FAILED)]
    AllSourcesFailed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingIp | AppError::InvalidIp | AppError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::AllSourcesFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Lookup failed: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_rate_limit_response() {
        let response = AppError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let body = body_json(response).await;
        assert_eq!(body["error"], ERROR_RATE_LIMIT);
        assert_eq!(body["status"], 429);
    }

    #[tokio::test]
    async fn test_all_sources_failed_response() {
        let response = AppError::AllSourcesFailed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], ERROR_ALL_SOURCES_FAILED);
    }

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(AppError::MissingIp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidIp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidIp.to_string(), ERROR_IP_FORMAT);
    }

    #[tokio::test]
    async fn test_invalid_query_keeps_json_shape() {
        let response = AppError::InvalidQuery("bad limit".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "bad limit");
        assert_eq!(body["status"], 400);
    }
}
