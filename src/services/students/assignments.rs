use super::StudentService;
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::entities::StudentAssignmentDetail;
use crate::models::students::requests::StudentId;

async fn ensure_student(service: &StudentService, id: &str) -> Result<()> {
    match service.storage().get_student_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(ClassroomError::student_not_found_id(id)),
    }
}

// 只返回已提交的记录，未评分的也包含在内
pub async fn list_student_assignments(
    service: &StudentService,
    id: StudentId,
) -> Result<Vec<StudentAssignmentDetail>> {
    ensure_student(service, &id.id).await?;
    service
        .storage()
        .list_student_submitted_assignments(&id.id)
        .await
}

// 已提交且已评分
pub async fn list_student_grades(
    service: &StudentService,
    id: StudentId,
) -> Result<Vec<StudentAssignmentDetail>> {
    ensure_student(service, &id.id).await?;
    service.storage().list_student_grades(&id.id).await
}
