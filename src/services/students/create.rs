use tracing::info;

use super::StudentService;
use crate::errors::Result;
use crate::models::students::{entities::Student, requests::CreateStudentDto};

pub async fn create_student(service: &StudentService, dto: CreateStudentDto) -> Result<Student> {
    let student = service.storage().create_student(dto).await?;
    info!("Student {} created with id {}", student.name, student.id);
    Ok(student)
}
