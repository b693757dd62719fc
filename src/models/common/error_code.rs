use serde::{Deserialize, Serialize};

/// 对外暴露的稳定错误代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    ValidationError,
    StudentNotFound,
    ClassNotFound,
    AssignmentNotFound,
    StudentAlreadyEnrolled,
    ServerError,
}
