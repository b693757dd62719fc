use tracing::info;

use super::AssignmentService;
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::{entities::StudentAssignment, requests::GradeAssignmentDto};

pub async fn grade_assignment(
    service: &AssignmentService,
    dto: GradeAssignmentDto,
) -> Result<StudentAssignment> {
    let task = service
        .storage()
        .grade_student_assignment(&dto.id, dto.grade)
        .await?
        .ok_or_else(|| ClassroomError::assignment_not_found_id(&dto.id))?;

    info!("Student assignment {} graded {}", task.id, dto.grade);
    Ok(task)
}
