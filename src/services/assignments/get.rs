use super::AssignmentService;
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::{entities::AssignmentDetail, requests::AssignmentId};

pub async fn get_assignment(
    service: &AssignmentService,
    id: AssignmentId,
) -> Result<AssignmentDetail> {
    service
        .storage()
        .get_assignment_detail(&id.id)
        .await?
        .ok_or_else(|| ClassroomError::assignment_not_found_id(&id.id))
}
