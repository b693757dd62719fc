//! 学生作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub assignment_id: String,
    pub status: String,
    pub grade: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student_assignment(
        self,
    ) -> crate::models::assignments::entities::StudentAssignment {
        use crate::models::assignments::entities::{
            Grade, StudentAssignment, StudentAssignmentStatus,
        };

        StudentAssignment {
            id: self.id,
            student_id: self.student_id,
            assignment_id: self.assignment_id,
            status: self
                .status
                .parse::<StudentAssignmentStatus>()
                .unwrap_or(StudentAssignmentStatus::Pending),
            grade: self.grade.and_then(|g| g.parse::<Grade>().ok()),
            created_at: super::to_datetime(self.created_at),
        }
    }
}
