use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

// 错误详情
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

// 统一的API响应结构: {error, data, success}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub error: Option<ApiError>,
    pub data: Option<T>,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            error: None,
            data: Some(data),
            success: true,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
            data: None,
            success: false,
        }
    }
}
