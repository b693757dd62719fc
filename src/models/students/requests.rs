use serde_json::Value;

use crate::errors::Result;
use crate::utils::{require_fields, require_uuid};

// 创建学生请求
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudentDto {
    pub name: String,
}

impl CreateStudentDto {
    pub fn from_request(body: &Value) -> Result<Self> {
        let [name] = require_fields(body, ["name"])?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

// 路径参数中的学生ID
#[derive(Debug, Clone, PartialEq)]
pub struct StudentId {
    pub id: String,
}

impl StudentId {
    pub fn from_request_params(id: &str) -> Result<Self> {
        require_uuid("id", id)?;
        Ok(Self { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_student_dto() {
        let dto = CreateStudentDto::from_request(&json!({ "name": "Ada" })).unwrap();
        assert_eq!(dto.name, "Ada");

        let err = CreateStudentDto::from_request(&json!({})).unwrap_err();
        assert_eq!(err.message(), "Missing fields: name");
    }

    #[test]
    fn test_student_id_requires_uuid() {
        assert!(StudentId::from_request_params("6f1c2b7e-3a4d-4e5f-8a9b-0c1d2e3f4a5b").is_ok());
        let err = StudentId::from_request_params("bad-uuid").unwrap_err();
        assert_eq!(err.message(), "Missing fields: id");
    }
}
