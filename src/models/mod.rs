pub mod course;
pub mod student;

pub use course::{Course, CourseRequest};
pub use student::{Student, StudentRequest};

use crate::error::AppError;

fn check_max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
