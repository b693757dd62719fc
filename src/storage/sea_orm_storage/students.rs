//! 学生存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, new_id};
use crate::entity::class_enrollments::{Column as EnrollmentColumn, Entity as ClassEnrollments};
use crate::entity::student_assignments::{
    Column as StudentAssignmentColumn, Entity as StudentAssignments,
};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    assignments::entities::{StudentAssignmentDetail, StudentAssignmentStatus},
    students::{
        entities::{Student, StudentDetail},
        requests::CreateStudentDto,
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentDto) -> Result<Student> {
        let model = ActiveModel {
            id: Set(new_id()),
            name: Set(req.name),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 列出全部学生，按姓名升序
    pub async fn list_students_impl(&self) -> Result<Vec<StudentDetail>> {
        let students = Students::find()
            .order_by_asc(Column::Name)
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生列表失败: {e}")))?;

        self.attach_student_relations(students).await
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过 ID 获取学生详情
    pub async fn get_student_detail_impl(&self, id: &str) -> Result<Option<StudentDetail>> {
        let result = Students::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some(model) => Ok(self.attach_student_relations(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 列出学生已提交的作业，`graded_only` 时只保留已评分的
    pub async fn list_student_assignments_impl(
        &self,
        student_id: &str,
        graded_only: bool,
    ) -> Result<Vec<StudentAssignmentDetail>> {
        let mut select = StudentAssignments::find()
            .filter(StudentAssignmentColumn::StudentId.eq(student_id))
            .filter(StudentAssignmentColumn::Status.eq(StudentAssignmentStatus::SUBMITTED));

        if graded_only {
            select = select.filter(StudentAssignmentColumn::Grade.is_not_null());
        }

        let rows = select
            .order_by_asc(StudentAssignmentColumn::CreatedAt)
            .find_also_related(crate::entity::assignments::Entity)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生作业失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(row, assignment)| StudentAssignmentDetail {
                student_assignment: row.into_student_assignment(),
                assignment: assignment.map(|a| a.into_assignment()),
            })
            .collect())
    }

    /// 批量加载选课记录与作业记录
    async fn attach_student_relations(&self, students: Vec<Model>) -> Result<Vec<StudentDetail>> {
        if students.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<String> = students.iter().map(|s| s.id.clone()).collect();

        let enrollments = ClassEnrollments::find()
            .filter(EnrollmentColumn::StudentId.is_in(student_ids.clone()))
            .order_by_asc(EnrollmentColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询选课记录失败: {e}")))?;

        let assignments = StudentAssignments::find()
            .filter(StudentAssignmentColumn::StudentId.is_in(student_ids))
            .order_by_asc(StudentAssignmentColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生作业失败: {e}")))?;

        let mut enrollment_map: HashMap<String, Vec<_>> = HashMap::new();
        for enrollment in enrollments {
            enrollment_map
                .entry(enrollment.student_id.clone())
                .or_default()
                .push(enrollment.into_enrollment());
        }

        let mut assignment_map: HashMap<String, Vec<_>> = HashMap::new();
        for assignment in assignments {
            assignment_map
                .entry(assignment.student_id.clone())
                .or_default()
                .push(assignment.into_student_assignment());
        }

        Ok(students
            .into_iter()
            .map(|s| {
                let classes = enrollment_map.remove(&s.id).unwrap_or_default();
                let assignments = assignment_map.remove(&s.id).unwrap_or_default();
                StudentDetail {
                    student: s.into_student(),
                    classes,
                    assignments,
                }
            })
            .collect())
    }
}
