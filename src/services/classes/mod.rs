pub mod assignments;
pub mod create;
pub mod enroll;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::entities::AssignmentDetail;
use crate::models::classes::{
    entities::{Class, Enrollment},
    requests::{ClassId, CreateClassDto, EnrollStudentDto},
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Arc<dyn Storage>,
}

impl ClassService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn create_class(&self, dto: CreateClassDto) -> Result<Class> {
        create::create_class(self, dto).await
    }

    // 根据班级 ID 列出班级作业
    pub async fn list_class_assignments(&self, id: ClassId) -> Result<Vec<AssignmentDetail>> {
        assignments::list_class_assignments(self, id).await
    }

    // 学生选课
    pub async fn enroll_student(&self, dto: EnrollStudentDto) -> Result<Enrollment> {
        enroll::enroll_student(self, dto).await
    }
}
