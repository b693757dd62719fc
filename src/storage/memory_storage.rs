//! 内存存储，仅用于服务层测试

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::Storage;
use crate::errors::{ClassroomError, Result};
use crate::models::{
    assignments::{
        entities::{
            Assignment, AssignmentDetail, Grade, StudentAssignment, StudentAssignmentDetail,
            StudentAssignmentStatus,
        },
        requests::{AssignStudentDto, CreateAssignmentDto},
    },
    classes::{
        entities::{Class, Enrollment},
        requests::{CreateClassDto, EnrollStudentDto},
    },
    students::{
        entities::{Student, StudentDetail},
        requests::CreateStudentDto,
    },
};
use crate::storage::sea_orm_storage::new_id;

#[derive(Default)]
struct State {
    students: Vec<Student>,
    classes: HashMap<String, Class>,
    assignments: Vec<Assignment>,
    enrollments: Vec<Enrollment>,
    student_assignments: Vec<StudentAssignment>,
}

impl State {
    fn student_detail(&self, student: &Student) -> StudentDetail {
        StudentDetail {
            student: student.clone(),
            classes: self
                .enrollments
                .iter()
                .filter(|e| e.student_id == student.id)
                .cloned()
                .collect(),
            assignments: self
                .student_assignments
                .iter()
                .filter(|sa| sa.student_id == student.id)
                .cloned()
                .collect(),
        }
    }

    fn assignment_detail(&self, assignment: &Assignment) -> AssignmentDetail {
        AssignmentDetail {
            assignment: assignment.clone(),
            class: self.classes.get(&assignment.class_id).cloned(),
            student_tasks: self
                .student_assignments
                .iter()
                .filter(|sa| sa.assignment_id == assignment.id)
                .cloned()
                .collect(),
        }
    }

    fn submitted_for(&self, student_id: &str, graded_only: bool) -> Vec<StudentAssignmentDetail> {
        self.student_assignments
            .iter()
            .filter(|sa| sa.student_id == student_id)
            .filter(|sa| sa.status == StudentAssignmentStatus::Submitted)
            .filter(|sa| !graded_only || sa.is_graded())
            .map(|sa| StudentAssignmentDetail {
                student_assignment: sa.clone(),
                assignment: self
                    .assignments
                    .iter()
                    .find(|a| a.id == sa.assignment_id)
                    .cloned(),
            })
            .collect()
    }
}

#[derive(Default)]
pub struct InMemoryStorage {
    state: Mutex<State>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("memory storage poisoned")
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_student(&self, student: CreateStudentDto) -> Result<Student> {
        let created = Student {
            id: new_id(),
            name: student.name,
            created_at: Utc::now(),
        };
        self.lock().students.push(created.clone());
        Ok(created)
    }

    async fn list_students(&self) -> Result<Vec<StudentDetail>> {
        let state = self.lock();
        let mut students: Vec<&Student> = state.students.iter().collect();
        students.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(students.into_iter().map(|s| state.student_detail(s)).collect())
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        Ok(self.lock().students.iter().find(|s| s.id == id).cloned())
    }

    async fn get_student_detail(&self, id: &str) -> Result<Option<StudentDetail>> {
        let state = self.lock();
        Ok(state
            .students
            .iter()
            .find(|s| s.id == id)
            .map(|s| state.student_detail(s)))
    }

    async fn list_student_submitted_assignments(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentAssignmentDetail>> {
        Ok(self.lock().submitted_for(student_id, false))
    }

    async fn list_student_grades(&self, student_id: &str) -> Result<Vec<StudentAssignmentDetail>> {
        Ok(self.lock().submitted_for(student_id, true))
    }

    async fn create_class(&self, class: CreateClassDto) -> Result<Class> {
        let created = Class {
            id: new_id(),
            name: class.name,
            created_at: Utc::now(),
        };
        self.lock()
            .classes
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn get_class_by_id(&self, id: &str) -> Result<Option<Class>> {
        Ok(self.lock().classes.get(id).cloned())
    }

    async fn list_class_assignments(&self, class_id: &str) -> Result<Vec<AssignmentDetail>> {
        let state = self.lock();
        Ok(state
            .assignments
            .iter()
            .filter(|a| a.class_id == class_id)
            .map(|a| state.assignment_detail(a))
            .collect())
    }

    async fn get_enrollment(
        &self,
        student_id: &str,
        class_id: &str,
    ) -> Result<Option<Enrollment>> {
        Ok(self
            .lock()
            .enrollments
            .iter()
            .find(|e| e.student_id == student_id && e.class_id == class_id)
            .cloned())
    }

    async fn create_enrollment(&self, enrollment: EnrollStudentDto) -> Result<Enrollment> {
        let mut state = self.lock();
        if state
            .enrollments
            .iter()
            .any(|e| e.student_id == enrollment.student_id && e.class_id == enrollment.class_id)
        {
            return Err(ClassroomError::already_enrolled(
                &enrollment.student_id,
                &enrollment.class_id,
            ));
        }
        let created = Enrollment {
            id: new_id(),
            student_id: enrollment.student_id,
            class_id: enrollment.class_id,
            created_at: Utc::now(),
        };
        state.enrollments.push(created.clone());
        Ok(created)
    }

    async fn create_assignment(&self, assignment: CreateAssignmentDto) -> Result<Assignment> {
        let created = Assignment {
            id: new_id(),
            class_id: assignment.class_id,
            title: assignment.title,
            created_at: Utc::now(),
        };
        self.lock().assignments.push(created.clone());
        Ok(created)
    }

    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>> {
        Ok(self.lock().assignments.iter().find(|a| a.id == id).cloned())
    }

    async fn get_assignment_detail(&self, id: &str) -> Result<Option<AssignmentDetail>> {
        let state = self.lock();
        Ok(state
            .assignments
            .iter()
            .find(|a| a.id == id)
            .map(|a| state.assignment_detail(a)))
    }

    async fn create_student_assignment(
        &self,
        assign: AssignStudentDto,
    ) -> Result<StudentAssignment> {
        let created = StudentAssignment {
            id: new_id(),
            student_id: assign.student_id,
            assignment_id: assign.assignment_id,
            status: StudentAssignmentStatus::Pending,
            grade: None,
            created_at: Utc::now(),
        };
        self.lock().student_assignments.push(created.clone());
        Ok(created)
    }

    async fn submit_student_assignment(&self, id: &str) -> Result<Option<StudentAssignment>> {
        let mut state = self.lock();
        Ok(state
            .student_assignments
            .iter_mut()
            .find(|sa| sa.id == id)
            .map(|sa| {
                sa.status = StudentAssignmentStatus::Submitted;
                sa.clone()
            }))
    }

    async fn grade_student_assignment(
        &self,
        id: &str,
        grade: Grade,
    ) -> Result<Option<StudentAssignment>> {
        let mut state = self.lock();
        Ok(state
            .student_assignments
            .iter_mut()
            .find(|sa| sa.id == id)
            .map(|sa| {
                sa.grade = Some(grade);
                sa.clone()
            }))
    }
}
