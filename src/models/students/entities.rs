use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::StudentAssignment;
use crate::models::classes::entities::Enrollment;

// 学生实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 学生详情，附带选课记录与作业记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: Student,
    pub classes: Vec<Enrollment>,
    pub assignments: Vec<StudentAssignment>,
}
