//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 服务层抛出的领域错误原样穿过路由层，在 `ResponseError` 实现中统一翻译为 HTTP 响应。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classroom_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ClassroomError {
            $($variant(String),)*
        }

        impl ClassroomError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassroomError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassroomError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassroomError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classroom_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Serialization("E004", "Serialization Error"),
    Validation("E005", "Validation Error"),
    StudentNotFound("E006", "Student Not Found"),
    ClassNotFound("E007", "Class Not Found"),
    AssignmentNotFound("E008", "Assignment Not Found"),
    StudentAlreadyEnrolled("E009", "Student Already Enrolled"),
}

impl ClassroomError {
    /// 请求体字段缺失或格式错误
    pub fn invalid_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        let fields: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
        ClassroomError::Validation(format!("Missing fields: {}", fields.join(", ")))
    }

    pub fn student_not_found_id(id: &str) -> Self {
        ClassroomError::StudentNotFound(format!("Student with {id} was not found."))
    }

    pub fn class_not_found_id(id: &str) -> Self {
        ClassroomError::ClassNotFound(format!("Class with {id} was not found."))
    }

    pub fn assignment_not_found_id(id: &str) -> Self {
        ClassroomError::AssignmentNotFound(format!("Assignment with {id} was not found."))
    }

    pub fn already_enrolled(student_id: &str, class_id: &str) -> Self {
        ClassroomError::StudentAlreadyEnrolled(format!(
            "The student {student_id} is already enrolled in the class {class_id}"
        ))
    }

    /// 对外暴露的稳定错误代码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ClassroomError::Validation(_) => ErrorCode::ValidationError,
            ClassroomError::StudentNotFound(_) => ErrorCode::StudentNotFound,
            ClassroomError::ClassNotFound(_) => ErrorCode::ClassNotFound,
            ClassroomError::AssignmentNotFound(_) => ErrorCode::AssignmentNotFound,
            ClassroomError::StudentAlreadyEnrolled(_) => ErrorCode::StudentAlreadyEnrolled,
            ClassroomError::DatabaseConfig(_)
            | ClassroomError::DatabaseConnection(_)
            | ClassroomError::DatabaseOperation(_)
            | ClassroomError::Serialization(_) => ErrorCode::ServerError,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassroomError {}

impl ResponseError for ClassroomError {
    fn status_code(&self) -> StatusCode {
        match self.error_code() {
            ErrorCode::ValidationError | ErrorCode::StudentAlreadyEnrolled => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::StudentNotFound | ErrorCode::ClassNotFound | ErrorCode::AssignmentNotFound => {
                StatusCode::NOT_FOUND
            }
            ErrorCode::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.error_code();
        // 服务端错误只记录日志，不向调用方泄露细节
        let message = if code == ErrorCode::ServerError {
            error!("{}", self.format_simple());
            "Internal server error".to_string()
        } else {
            self.message().to_string()
        };

        HttpResponse::build(self.status_code()).json(ApiResponse::error(code, message))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassroomError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassroomError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassroomError {
    fn from(err: serde_json::Error) -> Self {
        ClassroomError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassroomError>;
