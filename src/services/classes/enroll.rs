use tracing::info;

use super::ClassService;
use crate::errors::{ClassroomError, Result};
use crate::models::classes::{entities::Enrollment, requests::EnrollStudentDto};

/// 学生选课
///
/// 依次检查学生存在、班级存在、未重复选课，再写入。
/// 检查与写入之间的并发重复由存储层的唯一索引拦截，同样返回 StudentAlreadyEnrolled。
pub async fn enroll_student(service: &ClassService, dto: EnrollStudentDto) -> Result<Enrollment> {
    let storage = service.storage();

    if storage.get_student_by_id(&dto.student_id).await?.is_none() {
        return Err(ClassroomError::student_not_found_id(&dto.student_id));
    }

    if storage.get_class_by_id(&dto.class_id).await?.is_none() {
        return Err(ClassroomError::class_not_found_id(&dto.class_id));
    }

    if storage
        .get_enrollment(&dto.student_id, &dto.class_id)
        .await?
        .is_some()
    {
        return Err(ClassroomError::already_enrolled(
            &dto.student_id,
            &dto.class_id,
        ));
    }

    let enrollment = storage.create_enrollment(dto).await?;
    info!(
        "Student {} enrolled in class {}",
        enrollment.student_id, enrollment.class_id
    );
    Ok(enrollment)
}
