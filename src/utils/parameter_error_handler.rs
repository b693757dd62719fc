use actix_web::{HttpRequest, error::JsonPayloadError, web};
use tracing::debug;

use crate::errors::ClassroomError;

/// JSON 提取器配置，请求体上限由 `server.limits.max_payload_size` 决定
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

/// JSON 请求体解析失败时，按校验错误返回统一响应
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected JSON payload on {}: {}", req.path(), err);

    let message = match &err {
        JsonPayloadError::ContentType => "Request body must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        _ => format!("Invalid JSON payload: {err}"),
    };

    ClassroomError::validation(message).into()
}
