use super::StudentService;
use crate::errors::Result;
use crate::models::students::entities::StudentDetail;

pub async fn list_students(service: &StudentService) -> Result<Vec<StudentDetail>> {
    service.storage().list_students().await
}
