use tracing::info;

use super::AssignmentService;
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::{entities::StudentAssignment, requests::SubmitAssignmentDto};

// 不检查之前的状态，重复提交同样成功
pub async fn submit_assignment(
    service: &AssignmentService,
    dto: SubmitAssignmentDto,
) -> Result<StudentAssignment> {
    let task = service
        .storage()
        .submit_student_assignment(&dto.id)
        .await?
        .ok_or_else(|| ClassroomError::assignment_not_found_id(&dto.id))?;

    info!("Student assignment {} submitted", task.id);
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorCode;
    use crate::models::assignments::entities::StudentAssignmentStatus;
    use crate::services::assignments::fixtures::seed;
    use crate::services::test_support::{ABSENT_ID, memory};

    #[actix_web::test]
    async fn test_submit_twice_succeeds() {
        let storage = memory();
        let seeded = seed(&storage).await;
        let service = AssignmentService::new(storage);
        let dto = SubmitAssignmentDto {
            id: seeded.task_id.clone(),
        };

        let first = service.submit_assignment(dto.clone()).await.unwrap();
        assert_eq!(first.status, StudentAssignmentStatus::Submitted);

        let second = service.submit_assignment(dto).await.unwrap();
        assert_eq!(second.status, StudentAssignmentStatus::Submitted);
        assert_eq!(second.id, seeded.task_id);
    }

    #[actix_web::test]
    async fn test_submit_absent() {
        let service = AssignmentService::new(memory());
        let err = service
            .submit_assignment(SubmitAssignmentDto { id: ABSENT_ID.into() })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::AssignmentNotFound);
    }
}
