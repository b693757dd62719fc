pub mod assignments;

pub mod classes;

pub mod students;

pub use assignments::configure_assignment_routes;
pub use classes::configure_class_routes;
pub use students::configure_student_routes;
