use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentDetail, Grade, StudentAssignment, StudentAssignmentDetail},
        requests::{AssignStudentDto, CreateAssignmentDto},
    },
    classes::{
        entities::{Class, Enrollment},
        requests::{CreateClassDto, EnrollStudentDto},
    },
    students::{
        entities::{Student, StudentDetail},
        requests::CreateStudentDto,
    },
};

use crate::config::DatabaseConfig;
use crate::errors::Result;

#[cfg(test)]
pub mod memory_storage;
pub mod sea_orm_storage;

/// 持久化网关：每个实体操作对应一个方法，只按主键透传到关系型存储
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentDto) -> Result<Student>;
    // 列出全部学生（按姓名升序）
    async fn list_students(&self) -> Result<Vec<StudentDetail>>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>>;
    // 通过ID获取学生详情（含选课与作业记录）
    async fn get_student_detail(&self, id: &str) -> Result<Option<StudentDetail>>;
    // 学生已提交的作业
    async fn list_student_submitted_assignments(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentAssignmentDetail>>;
    // 学生已提交且已评分的作业
    async fn list_student_grades(&self, student_id: &str) -> Result<Vec<StudentAssignmentDetail>>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassDto) -> Result<Class>;
    // 通过ID获取班级
    async fn get_class_by_id(&self, id: &str) -> Result<Option<Class>>;
    // 列出班级下的作业
    async fn list_class_assignments(&self, class_id: &str) -> Result<Vec<AssignmentDetail>>;
    // 查询选课记录
    async fn get_enrollment(&self, student_id: &str, class_id: &str)
    -> Result<Option<Enrollment>>;
    // 创建选课记录，违反唯一约束时返回 StudentAlreadyEnrolled
    async fn create_enrollment(&self, enrollment: EnrollStudentDto) -> Result<Enrollment>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, assignment: CreateAssignmentDto) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>>;
    // 通过ID获取作业详情（含班级与学生作业记录）
    async fn get_assignment_detail(&self, id: &str) -> Result<Option<AssignmentDetail>>;

    /// 学生作业方法
    // 给学生布置作业
    async fn create_student_assignment(
        &self,
        assign: AssignStudentDto,
    ) -> Result<StudentAssignment>;
    // 标记为已提交
    async fn submit_student_assignment(&self, id: &str) -> Result<Option<StudentAssignment>>;
    // 评分
    async fn grade_student_assignment(
        &self,
        id: &str,
        grade: Grade,
    ) -> Result<Option<StudentAssignment>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
