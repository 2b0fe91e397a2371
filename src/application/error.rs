//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::BookId;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: BookId,
    },

    /// 请求自相矛盾（如路径 ID 与请求体 ID 不一致）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: BookId) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建请求无效错误
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}
