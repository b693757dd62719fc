use super::ClassService;
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::entities::AssignmentDetail;
use crate::models::classes::requests::ClassId;

pub async fn list_class_assignments(
    service: &ClassService,
    id: ClassId,
) -> Result<Vec<AssignmentDetail>> {
    let storage = service.storage();

    if storage.get_class_by_id(&id.id).await?.is_none() {
        return Err(ClassroomError::class_not_found_id(&id.id));
    }

    storage.list_class_assignments(&id.id).await
}
