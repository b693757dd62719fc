use serde_json::Value;

use crate::errors::Result;
use crate::utils::{require_fields, require_uuid};

// 创建班级请求
#[derive(Debug, Clone, PartialEq)]
pub struct CreateClassDto {
    pub name: String,
}

impl CreateClassDto {
    pub fn from_request(body: &Value) -> Result<Self> {
        let [name] = require_fields(body, ["name"])?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

// 学生选课请求
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollStudentDto {
    pub student_id: String,
    pub class_id: String,
}

impl EnrollStudentDto {
    pub fn from_request(body: &Value) -> Result<Self> {
        let [student_id, class_id] = require_fields(body, ["studentId", "classId"])?;
        require_uuid("studentId", student_id)?;
        require_uuid("classId", class_id)?;

        Ok(Self {
            student_id: student_id.to_string(),
            class_id: class_id.to_string(),
        })
    }
}

// 路径参数中的班级ID
#[derive(Debug, Clone, PartialEq)]
pub struct ClassId {
    pub id: String,
}

impl ClassId {
    pub fn from_request_params(id: &str) -> Result<Self> {
        require_uuid("id", id)?;
        Ok(Self { id: id.to_string() })
    }
}
