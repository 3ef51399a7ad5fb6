//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::AppError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字，按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 排名查询与审计日志错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // 查询错误 3000-3099
    LogWriteFailed = 3000,
    LogQueryFailed = 3001,
}

impl From<&AppError> for ErrorCode {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Validation(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::DatabaseConnection(_) => ErrorCode::ServiceUnavailable,
            AppError::DatabaseConfig(_)
            | AppError::DatabaseOperation(_)
            | AppError::FileOperation(_)
            | AppError::Serialization(_) => ErrorCode::InternalServerError,
        }
    }
}
