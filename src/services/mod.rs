pub mod assignments;
pub mod classes;
pub mod students;

pub use assignments::AssignmentService;
pub use classes::ClassService;
pub use students::StudentService;
