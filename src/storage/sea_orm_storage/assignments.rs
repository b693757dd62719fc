//! 作业存储操作

use super::{SeaOrmStorage, new_id};
use crate::entity::assignments::{ActiveModel, Entity as Assignments};
use crate::entity::classes::Entity as Classes;
use crate::entity::student_assignments::{
    Column as StudentAssignmentColumn, Entity as StudentAssignments,
};
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::{
    entities::{Assignment, AssignmentDetail},
    requests::CreateAssignmentDto,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(&self, req: CreateAssignmentDto) -> Result<Assignment> {
        let model = ActiveModel {
            id: Set(new_id()),
            class_id: Set(req.class_id),
            title: Set(req.title),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: &str) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 通过 ID 获取作业详情
    pub async fn get_assignment_detail_impl(&self, id: &str) -> Result<Option<AssignmentDetail>> {
        let Some((assignment, class)) = Assignments::find_by_id(id.to_string())
            .find_also_related(Classes)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询作业失败: {e}")))?
        else {
            return Ok(None);
        };

        let student_tasks = StudentAssignments::find()
            .filter(StudentAssignmentColumn::AssignmentId.eq(id))
            .order_by_asc(StudentAssignmentColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生作业失败: {e}")))?;

        Ok(Some(AssignmentDetail {
            assignment: assignment.into_assignment(),
            class: class.map(|c| c.into_class()),
            student_tasks: student_tasks
                .into_iter()
                .map(|t| t.into_student_assignment())
                .collect(),
        }))
    }
}
