pub mod enrollment;

pub use enrollment::{EnrollmentService, check_student_deletable};
