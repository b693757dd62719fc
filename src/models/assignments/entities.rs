use serde::{Deserialize, Serialize};

use crate::models::classes::entities::Class;

// 学生作业状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StudentAssignmentStatus {
    Pending,   // 待提交
    Submitted, // 已提交
}

impl StudentAssignmentStatus {
    pub const PENDING: &'static str = "pending";
    pub const SUBMITTED: &'static str = "submitted";
}

impl<'de> Deserialize<'de> for StudentAssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for StudentAssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentAssignmentStatus::Pending => write!(f, "{}", Self::PENDING),
            StudentAssignmentStatus::Submitted => write!(f, "{}", Self::SUBMITTED),
        }
    }
}

impl std::str::FromStr for StudentAssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PENDING => Ok(StudentAssignmentStatus::Pending),
            Self::SUBMITTED => Ok(StudentAssignmentStatus::Submitted),
            _ => Err(format!(
                "Invalid assignment status: '{s}'. Supported: pending, submitted"
            )),
        }
    }
}

// 成绩等级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        write!(f, "{letter}")
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            _ => Err(format!("Invalid grade: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub class_id: String,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 作业详情，附带所属班级和每个学生的作业记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDetail {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub class: Option<Class>,
    pub student_tasks: Vec<StudentAssignment>,
}

// 学生作业（学生与作业的关联记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAssignment {
    pub id: String,
    pub student_id: String,
    pub assignment_id: String,
    pub status: StudentAssignmentStatus,
    pub grade: Option<Grade>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl StudentAssignment {
    pub fn is_graded(&self) -> bool {
        self.status == StudentAssignmentStatus::Submitted && self.grade.is_some()
    }
}

// 学生视角的作业记录，附带作业本身
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAssignmentDetail {
    #[serde(flatten)]
    pub student_assignment: StudentAssignment,
    pub assignment: Option<Assignment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_text() {
        assert_eq!(StudentAssignmentStatus::Submitted.to_string(), "submitted");
        assert_eq!(
            "pending".parse::<StudentAssignmentStatus>(),
            Ok(StudentAssignmentStatus::Pending)
        );
        assert!("done".parse::<StudentAssignmentStatus>().is_err());
    }

    #[test]
    fn test_grade_letters_are_case_sensitive() {
        assert_eq!("B".parse::<Grade>(), Ok(Grade::B));
        assert!("b".parse::<Grade>().is_err());
        assert!("E".parse::<Grade>().is_err());
        assert!("A+".parse::<Grade>().is_err());
    }

    #[test]
    fn test_student_assignment_serializes_camel_case() {
        let row = StudentAssignment {
            id: "sa".into(),
            student_id: "s".into(),
            assignment_id: "a".into(),
            status: StudentAssignmentStatus::Pending,
            grade: None,
            created_at: chrono::DateTime::<chrono::Utc>::from_timestamp(0, 0).unwrap(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["studentId"], "s");
        assert_eq!(value["assignmentId"], "a");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["grade"], serde_json::Value::Null);
        assert!(!row.is_graded());
    }
}
