use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    // 班级ID
    pub id: String,
    // 班级名称
    pub name: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 选课记录，同一 (学生, 班级) 只允许出现一次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub class_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
