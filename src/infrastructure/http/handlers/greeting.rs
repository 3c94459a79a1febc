//! Greeting & Fallback Handlers

use axum::{http::StatusCode, Json};

use crate::infrastructure::http::dto::GreetingResponse;
use crate::infrastructure::http::error::ApiError;

/// GET /user - 固定问候语
pub async fn hello_user() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        msg: "Hello, this is your GET /user response ",
    })
}

/// 未匹配任何路由
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

/// 路径存在但方法不支持
pub async fn method_not_allowed() -> ApiError {
    ApiError::invalid_usage("Method not allowed", StatusCode::METHOD_NOT_ALLOWED)
}
