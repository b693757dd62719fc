//! 班级与选课存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, new_id};
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::class_enrollments::{
    ActiveModel as EnrollmentActiveModel, Column as EnrollmentColumn, Entity as ClassEnrollments,
};
use crate::entity::classes::{ActiveModel, Entity as Classes};
use crate::entity::student_assignments::{
    Column as StudentAssignmentColumn, Entity as StudentAssignments,
};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    assignments::entities::AssignmentDetail,
    classes::{
        entities::{Class, Enrollment},
        requests::{CreateClassDto, EnrollStudentDto},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassDto) -> Result<Class> {
        let model = ActiveModel {
            id: Set(new_id()),
            name: Set(req.name),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, id: &str) -> Result<Option<Class>> {
        let result = Classes::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出班级下的作业，附带班级和学生作业记录
    pub async fn list_class_assignments_impl(
        &self,
        class_id: &str,
    ) -> Result<Vec<AssignmentDetail>> {
        let class = self.get_class_by_id_impl(class_id).await?;

        let assignments = Assignments::find()
            .filter(AssignmentColumn::ClassId.eq(class_id))
            .order_by_asc(AssignmentColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级作业失败: {e}")))?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let assignment_ids: Vec<String> = assignments.iter().map(|a| a.id.clone()).collect();
        let tasks = StudentAssignments::find()
            .filter(StudentAssignmentColumn::AssignmentId.is_in(assignment_ids))
            .order_by_asc(StudentAssignmentColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生作业失败: {e}")))?;

        let mut task_map: HashMap<String, Vec<_>> = HashMap::new();
        for task in tasks {
            task_map
                .entry(task.assignment_id.clone())
                .or_default()
                .push(task.into_student_assignment());
        }

        Ok(assignments
            .into_iter()
            .map(|a| {
                let student_tasks = task_map.remove(&a.id).unwrap_or_default();
                AssignmentDetail {
                    assignment: a.into_assignment(),
                    class: class.clone(),
                    student_tasks,
                }
            })
            .collect())
    }

    /// 查询选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_id: &str,
        class_id: &str,
    ) -> Result<Option<Enrollment>> {
        let result = ClassEnrollments::find()
            .filter(
                Condition::all()
                    .add(EnrollmentColumn::StudentId.eq(student_id))
                    .add(EnrollmentColumn::ClassId.eq(class_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 创建选课记录
    pub async fn create_enrollment_impl(&self, req: EnrollStudentDto) -> Result<Enrollment> {
        let model = EnrollmentActiveModel {
            id: Set(new_id()),
            student_id: Set(req.student_id.clone()),
            class_id: Set(req.class_id.clone()),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        // 检查与插入之间存在竞争窗口，唯一索引兜底
        let result = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ClassroomError::already_enrolled(&req.student_id, &req.class_id)
            }
            _ => ClassroomError::database_operation(format!("创建选课记录失败: {e}")),
        })?;

        Ok(result.into_enrollment())
    }
}
