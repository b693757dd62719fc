//! 数据模型定义
//!
//! - `entities`: 对外返回的业务实体
//! - `requests`: 请求 DTO，负责从原始输入构造并校验强类型命令

pub mod assignments;
pub mod classes;
pub mod common;
pub mod students;

pub use common::{ApiError, ApiResponse, ErrorCode};
