use sqlx::SqlitePool;

use crate::db::{CourseRepository, StudentRepository};
use crate::services::EnrollmentService;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub courses: CourseRepository,
    pub students: StudentRepository,
    pub enrollment: EnrollmentService,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let courses = CourseRepository::new(db.clone());
        let students = StudentRepository::new(db.clone());
        let enrollment = EnrollmentService::new(courses.clone(), students.clone());
        Self {
            db,
            courses,
            students,
            enrollment,
        }
    }
}
