pub mod assignments;
pub mod create;
pub mod get;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::entities::StudentAssignmentDetail;
use crate::models::students::{
    entities::{Student, StudentDetail},
    requests::{CreateStudentDto, StudentId},
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建学生
    pub async fn create_student(&self, dto: CreateStudentDto) -> Result<Student> {
        create::create_student(self, dto).await
    }

    // 列出全部学生，按姓名升序
    pub async fn list_students(&self) -> Result<Vec<StudentDetail>> {
        list::list_students(self).await
    }

    // 根据学生 ID 获取学生详情
    pub async fn get_student(&self, id: StudentId) -> Result<StudentDetail> {
        get::get_student(self, id).await
    }

    // 学生已提交的作业
    pub async fn list_student_assignments(
        &self,
        id: StudentId,
    ) -> Result<Vec<StudentAssignmentDetail>> {
        assignments::list_student_assignments(self, id).await
    }

    // 学生已评分的作业
    pub async fn list_student_grades(&self, id: StudentId) -> Result<Vec<StudentAssignmentDetail>> {
        assignments::list_student_grades(self, id).await
    }
}
