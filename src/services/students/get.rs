use super::StudentService;
use crate::errors::{ClassroomError, Result};
use crate::models::students::{entities::StudentDetail, requests::StudentId};

pub async fn get_student(service: &StudentService, id: StudentId) -> Result<StudentDetail> {
    service
        .storage()
        .get_student_detail(&id.id)
        .await?
        .ok_or_else(|| ClassroomError::student_not_found_id(&id.id))
}
