//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::team::FieldErrors;
use crate::domain::SortParseError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 字段校验失败（按字段收集）
    #[error("Validation failed: {0}")]
    InvalidFields(FieldErrors),

    /// 请求参数错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<FieldErrors> for ApplicationError {
    fn from(errors: FieldErrors) -> Self {
        Self::InvalidFields(errors)
    }
}

impl From<SortParseError> for ApplicationError {
    fn from(err: SortParseError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        match err {
            crate::application::ports::RepositoryError::InvalidQuery(msg) => {
                Self::ValidationError(msg)
            }
            other => Self::RepositoryError(other.to_string()),
        }
    }
}
