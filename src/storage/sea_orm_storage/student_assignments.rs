//! 学生作业存储操作

use super::{SeaOrmStorage, new_id};
use crate::entity::student_assignments::{ActiveModel, Entity as StudentAssignments};
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::{
    entities::{Grade, StudentAssignment, StudentAssignmentStatus},
    requests::AssignStudentDto,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 给学生布置作业，初始状态为 pending
    pub async fn create_student_assignment_impl(
        &self,
        req: AssignStudentDto,
    ) -> Result<StudentAssignment> {
        let model = ActiveModel {
            id: Set(new_id()),
            student_id: Set(req.student_id),
            assignment_id: Set(req.assignment_id),
            status: Set(StudentAssignmentStatus::Pending.to_string()),
            grade: Set(None),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("布置作业失败: {e}")))?;

        Ok(result.into_student_assignment())
    }

    /// 标记为已提交，不检查之前的状态
    pub async fn submit_student_assignment_impl(
        &self,
        id: &str,
    ) -> Result<Option<StudentAssignment>> {
        let existing = StudentAssignments::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生作业失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.status = Set(StudentAssignmentStatus::Submitted.to_string());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("提交作业失败: {e}")))?;

        Ok(Some(result.into_student_assignment()))
    }

    /// 评分
    pub async fn grade_student_assignment_impl(
        &self,
        id: &str,
        grade: Grade,
    ) -> Result<Option<StudentAssignment>> {
        let existing = StudentAssignments::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生作业失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.grade = Set(Some(grade.to_string()));

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("评分失败: {e}")))?;

        Ok(Some(result.into_student_assignment()))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::assignments::entities::{Grade, StudentAssignmentStatus};
    use crate::models::assignments::requests::{AssignStudentDto, CreateAssignmentDto};
    use crate::models::classes::requests::{CreateClassDto, EnrollStudentDto};
    use crate::models::students::requests::CreateStudentDto;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn seeded() -> (SeaOrmStorage, String, String, String) {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        let student = storage
            .create_student(CreateStudentDto {
                name: "Ada".into(),
            })
            .await
            .unwrap();
        let class = storage
            .create_class(CreateClassDto {
                name: "Math".into(),
            })
            .await
            .unwrap();
        let assignment = storage
            .create_assignment(CreateAssignmentDto {
                class_id: class.id.clone(),
                title: "Essay".into(),
            })
            .await
            .unwrap();
        (storage, student.id, class.id, assignment.id)
    }

    #[actix_web::test]
    async fn test_submit_then_grade_filters_listings() {
        let (storage, student_id, _, assignment_id) = seeded().await;

        let task = storage
            .create_student_assignment(AssignStudentDto {
                student_id: student_id.clone(),
                assignment_id: assignment_id.clone(),
            })
            .await
            .unwrap();
        assert_eq!(task.status, StudentAssignmentStatus::Pending);

        assert!(
            storage
                .list_student_submitted_assignments(&student_id)
                .await
                .unwrap()
                .is_empty()
        );

        let submitted = storage
            .submit_student_assignment(&task.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(submitted.status, StudentAssignmentStatus::Submitted);
        assert_eq!(submitted.grade, None);

        let listed = storage
            .list_student_submitted_assignments(&student_id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(
            listed[0].assignment.as_ref().map(|a| a.id.as_str()),
            Some(assignment_id.as_str())
        );
        assert!(storage.list_student_grades(&student_id).await.unwrap().is_empty());

        let graded = storage
            .grade_student_assignment(&task.id, Grade::B)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graded.grade, Some(Grade::B));
        assert_eq!(graded.status, StudentAssignmentStatus::Submitted);

        let grades = storage.list_student_grades(&student_id).await.unwrap();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].student_assignment.grade, Some(Grade::B));
    }

    #[actix_web::test]
    async fn test_missing_rows_return_none() {
        let (storage, ..) = seeded().await;
        let missing = "6f1c2b7e-3a4d-4e5f-8a9b-0c1d2e3f4a5b";

        assert!(storage.submit_student_assignment(missing).await.unwrap().is_none());
        assert!(
            storage
                .grade_student_assignment(missing, Grade::A)
                .await
                .unwrap()
                .is_none()
        );
        assert!(storage.get_student_by_id(missing).await.unwrap().is_none());
        assert!(storage.get_class_by_id(missing).await.unwrap().is_none());
        assert!(storage.get_assignment_detail(missing).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_unique_index_rejects_second_enrollment() {
        let (storage, student_id, class_id, _) = seeded().await;
        let dto = EnrollStudentDto {
            student_id: student_id.clone(),
            class_id: class_id.clone(),
        };

        storage.create_enrollment(dto.clone()).await.unwrap();
        let err = storage.create_enrollment(dto).await.unwrap_err();
        assert_eq!(
            err.error_code(),
            crate::models::ErrorCode::StudentAlreadyEnrolled
        );
    }

    #[actix_web::test]
    async fn test_students_ordered_by_name_with_relations() {
        let (storage, ada_id, class_id, _) = seeded().await;
        storage
            .create_student(CreateStudentDto {
                name: "Zed".into(),
            })
            .await
            .unwrap();
        storage
            .create_student(CreateStudentDto {
                name: "Bob".into(),
            })
            .await
            .unwrap();
        storage
            .create_enrollment(EnrollStudentDto {
                student_id: ada_id.clone(),
                class_id,
            })
            .await
            .unwrap();

        let students = storage.list_students().await.unwrap();
        let names: Vec<&str> = students.iter().map(|s| s.student.name.as_str()).collect();
        assert_eq!(names, ["Ada", "Bob", "Zed"]);
        assert_eq!(students[0].classes.len(), 1);
        assert!(students[1].classes.is_empty());

        let detail = storage.get_student_detail(&ada_id).await.unwrap().unwrap();
        assert_eq!(detail.classes.len(), 1);
    }

    #[actix_web::test]
    async fn test_class_assignments_carry_class_and_tasks() {
        let (storage, student_id, class_id, assignment_id) = seeded().await;
        storage
            .create_student_assignment(AssignStudentDto {
                student_id,
                assignment_id: assignment_id.clone(),
            })
            .await
            .unwrap();

        let listed = storage.list_class_assignments(&class_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].assignment.id, assignment_id);
        assert_eq!(listed[0].class.as_ref().map(|c| c.name.as_str()), Some("Math"));
        assert_eq!(listed[0].student_tasks.len(), 1);

        let detail = storage
            .get_assignment_detail(&assignment_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.student_tasks.len(), 1);
        assert_eq!(detail.class.map(|c| c.id), Some(class_id));
    }
}
