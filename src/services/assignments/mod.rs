pub mod assign;
pub mod create;
pub mod get;
pub mod grade;
pub mod submit;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{
    entities::{Assignment, AssignmentDetail, StudentAssignment},
    requests::{
        AssignStudentDto, AssignmentId, CreateAssignmentDto, GradeAssignmentDto,
        SubmitAssignmentDto,
    },
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建作业
    pub async fn create_assignment(&self, dto: CreateAssignmentDto) -> Result<Assignment> {
        create::create_assignment(self, dto).await
    }

    // 根据作业 ID 获取作业详情
    pub async fn get_assignment(&self, id: AssignmentId) -> Result<AssignmentDetail> {
        get::get_assignment(self, id).await
    }

    // 给学生布置作业
    pub async fn assign_student(&self, dto: AssignStudentDto) -> Result<StudentAssignment> {
        assign::assign_student(self, dto).await
    }

    pub async fn submit_assignment(&self, dto: SubmitAssignmentDto) -> Result<StudentAssignment> {
        submit::submit_assignment(self, dto).await
    }

    pub async fn grade_assignment(&self, dto: GradeAssignmentDto) -> Result<StudentAssignment> {
        grade::grade_assignment(self, dto).await
    }
}
