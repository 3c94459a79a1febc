//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 调用方用法错误（渲染为带状态码的 JSON）
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    /// 引用的行不存在或唯一约束冲突
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 创建用法错误
    pub fn invalid_usage(message: impl Into<String>) -> Self {
        Self::InvalidUsage(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConstraintViolation(msg) => Self::ConstraintViolation(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}
