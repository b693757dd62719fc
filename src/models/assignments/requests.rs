use serde_json::Value;

use super::entities::Grade;
use crate::errors::{ClassroomError, Result};
use crate::utils::{require_fields, require_uuid};

// 创建作业请求
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAssignmentDto {
    pub class_id: String,
    pub title: String,
}

impl CreateAssignmentDto {
    pub fn from_request(body: &Value) -> Result<Self> {
        let [class_id, title] = require_fields(body, ["classId", "title"])?;
        require_uuid("classId", class_id)?;

        Ok(Self {
            class_id: class_id.to_string(),
            title: title.to_string(),
        })
    }
}

// 布置作业给学生
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStudentDto {
    pub student_id: String,
    pub assignment_id: String,
}

impl AssignStudentDto {
    pub fn from_request(body: &Value) -> Result<Self> {
        let [student_id, assignment_id] = require_fields(body, ["studentId", "assignmentId"])?;
        require_uuid("studentId", student_id)?;
        require_uuid("assignmentId", assignment_id)?;

        Ok(Self {
            student_id: student_id.to_string(),
            assignment_id: assignment_id.to_string(),
        })
    }
}

// 提交作业请求（id 为学生作业记录ID）
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitAssignmentDto {
    pub id: String,
}

impl SubmitAssignmentDto {
    pub fn from_request(body: &Value) -> Result<Self> {
        let [id] = require_fields(body, ["id"])?;
        require_uuid("id", id)?;
        Ok(Self { id: id.to_string() })
    }
}

// 评分请求
#[derive(Debug, Clone, PartialEq)]
pub struct GradeAssignmentDto {
    pub id: String,
    pub grade: Grade,
}

impl GradeAssignmentDto {
    pub fn from_request(body: &Value) -> Result<Self> {
        let [id, grade] = require_fields(body, ["id", "grade"])?;
        require_uuid("id", id)?;
        let grade = grade
            .parse::<Grade>()
            .map_err(|_| ClassroomError::invalid_fields(&["grade"]))?;

        Ok(Self {
            id: id.to_string(),
            grade,
        })
    }
}

// 路径参数中的作业ID
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentId {
    pub id: String,
}

impl AssignmentId {
    pub fn from_request_params(id: &str) -> Result<Self> {
        require_uuid("id", id)?;
        Ok(Self { id: id.to_string() })
    }
}
