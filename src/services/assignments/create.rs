use tracing::info;

use super::AssignmentService;
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentDto};

pub async fn create_assignment(
    service: &AssignmentService,
    dto: CreateAssignmentDto,
) -> Result<Assignment> {
    let storage = service.storage();

    // 所属班级必须存在，否则外键失败会变成 500
    if storage.get_class_by_id(&dto.class_id).await?.is_none() {
        return Err(ClassroomError::class_not_found_id(&dto.class_id));
    }

    let assignment = storage.create_assignment(dto).await?;
    info!(
        "Assignment {} created in class {}",
        assignment.id, assignment.class_id
    );
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorCode;
    use crate::models::classes::requests::CreateClassDto;
    use crate::services::test_support::{ABSENT_ID, memory};

    #[actix_web::test]
    async fn test_create_assignment() {
        let storage = memory();
        let class = storage
            .create_class(CreateClassDto { name: "Math".into() })
            .await
            .unwrap();
        let service = AssignmentService::new(storage);

        let assignment = service
            .create_assignment(CreateAssignmentDto {
                class_id: class.id.clone(),
                title: "Essay".into(),
            })
            .await
            .unwrap();
        assert_eq!(assignment.class_id, class.id);
        assert_eq!(assignment.title, "Essay");
    }

    #[actix_web::test]
    async fn test_create_assignment_for_absent_class() {
        let service = AssignmentService::new(memory());
        let err = service
            .create_assignment(CreateAssignmentDto {
                class_id: ABSENT_ID.into(),
                title: "Essay".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::ClassNotFound);
    }
}
