use tracing::info;

use super::AssignmentService;
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::{entities::StudentAssignment, requests::AssignStudentDto};

pub async fn assign_student(
    service: &AssignmentService,
    dto: AssignStudentDto,
) -> Result<StudentAssignment> {
    let storage = service.storage();

    if storage.get_student_by_id(&dto.student_id).await?.is_none() {
        return Err(ClassroomError::student_not_found_id(&dto.student_id));
    }

    if storage
        .get_assignment_by_id(&dto.assignment_id)
        .await?
        .is_none()
    {
        return Err(ClassroomError::assignment_not_found_id(&dto.assignment_id));
    }

    let task = storage.create_student_assignment(dto).await?;
    info!(
        "Assignment {} assigned to student {}",
        task.assignment_id, task.student_id
    );
    Ok(task)
}
