//! HTTP Error Handling
//!
//! 应用层错误到 HTTP 状态码的显式映射

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 按 ID 查找无结果
    NotFound(String),
    /// 调用方用法错误，携带要返回的状态码
    InvalidUsage { message: String, status: StatusCode },
    /// 未预期的错误，详情只写日志
    Internal(String),
}

impl ApiError {
    pub fn invalid_usage(message: impl Into<String>, status: StatusCode) -> Self {
        ApiError::InvalidUsage {
            message: message.into(),
            status,
        }
    }

    /// 状态码映射表
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidUsage { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                msg
            }
            ApiError::InvalidUsage { message, .. } => {
                tracing::warn!(status = status.as_u16(), error = %message, "Invalid usage");
                message
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
                "Internal server error".to_string()
            }
        };

        let body = ErrorResponse {
            message,
            status_code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::InvalidUsage(msg) => {
                ApiError::invalid_usage(msg, StatusCode::BAD_REQUEST)
            }
            ApplicationError::ConstraintViolation(msg) => ApiError::invalid_usage(
                format!("Referenced row does not exist or is duplicated: {}", msg),
                StatusCode::BAD_REQUEST,
            ),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let err: ApiError = ApplicationError::not_found("Planet", 3).into();
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Planet not found: 3");
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn test_invalid_usage_keeps_its_status() {
        let err = ApiError::invalid_usage("Nope", StatusCode::UNPROCESSABLE_ENTITY);
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Nope");
        assert_eq!(body["status_code"], 422);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err: ApiError = ApplicationError::RepositoryError("disk I/O error".into()).into();
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }

    #[test]
    fn test_constraint_violation_is_bad_request() {
        let err: ApiError =
            ApplicationError::ConstraintViolation("FOREIGN KEY constraint failed".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
