use tracing::{info, warn};

use crate::db::{CourseRepository, Repository, StudentRepository};
use crate::error::AppError;
use crate::models::{Course, Student};

/// Rules that span courses and students.
#[derive(Clone)]
pub struct EnrollmentService {
    courses: CourseRepository,
    students: StudentRepository,
}

/// Active-course deletion guard.
///
/// A student whose course is active stays put. A missing course (orphaned
/// `course_id`) does not guard anything.
pub fn check_student_deletable(student: &Student, course: Option<&Course>) -> Result<(), AppError> {
    match course {
        Some(course) if course.active => Err(AppError::Conflict(format!(
            "student {} cannot be deleted while enrolled in active course {}",
            student.id, course.id
        ))),
        _ => Ok(()),
    }
}

impl EnrollmentService {
    pub fn new(courses: CourseRepository, students: StudentRepository) -> Self {
        Self { courses, students }
    }

    /// Rejects a `course_id` that does not name a stored course.
    pub async fn ensure_course_exists(&self, course_id: i64) -> Result<(), AppError> {
        if self.courses.exists_by_id(course_id).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!("course {} does not exist", course_id)))
        }
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        let student = self
            .students
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("student {} not found", id)))?;

        let course = self.courses.find_by_id(student.course_id).await?;
        if course.is_none() {
            warn!("student {} references missing course {}", id, student.course_id);
        }
        check_student_deletable(&student, course.as_ref())?;

        self.students.delete_by_id(id).await?;
        info!("deleted student {}", id);
        Ok(())
    }

    pub async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        if !self.courses.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("course {} not found", id)));
        }

        let enrolled = self.students.count_by_course_id(id).await?;
        if enrolled > 0 {
            return Err(AppError::Conflict(format!(
                "course {} still has {} enrolled student(s)",
                id, enrolled
            )));
        }

        self.courses.delete_by_id(id).await?;
        info!("deleted course {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use super::*;
    use crate::db::{setup_test_db, setup_test_db_without_foreign_keys};
    use crate::models::{CourseRequest, StudentRequest};

    fn service(db: &SqlitePool) -> EnrollmentService {
        EnrollmentService::new(CourseRepository::new(db.clone()), StudentRepository::new(db.clone()))
    }

    fn math(active: bool) -> CourseRequest {
        CourseRequest {
            title: "Math".to_string(),
            description: "Intro".to_string(),
            workload_hours: 40,
            exercise_count: 10,
            active,
        }
    }

    fn ana(course_id: i64) -> StudentRequest {
        StudentRequest {
            first_name: "Ana".to_string(),
            last_name: "Lima".to_string(),
            email: "a@x.com".to_string(),
            age: 20,
            national_id: 123,
            course_id,
        }
    }

    #[test]
    fn guard_depends_on_course_state() {
        let student = ana(1).into_student(1);
        let active = math(true).into_course(1);
        let inactive = math(false).into_course(1);

        assert!(matches!(
            check_student_deletable(&student, Some(&active)),
            Err(AppError::Conflict(_))
        ));
        assert!(check_student_deletable(&student, Some(&inactive)).is_ok());
        assert!(check_student_deletable(&student, None).is_ok());
    }

    #[tokio::test]
    async fn test_delete_student_after_course_deactivated() {
        let db = setup_test_db().await;
        let courses = CourseRepository::new(db.clone());
        let students = StudentRepository::new(db.clone());
        let service = service(&db);

        let course = courses.save(None, math(true)).await.expect("Failed to insert course");
        let student = students.save(None, ana(course.id)).await.expect("Failed to insert student");

        let err = service.delete_student(student.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(students.exists_by_id(student.id).await.expect("exists query failed"));

        courses
            .save(Some(course.id), math(false))
            .await
            .expect("Failed to update course");
        service.delete_student(student.id).await.expect("delete should pass the guard");
        assert!(students.find_by_id(student.id).await.expect("find failed").is_none());
    }

    #[tokio::test]
    async fn test_delete_orphaned_student() {
        let db = setup_test_db_without_foreign_keys().await;
        let students = StudentRepository::new(db.clone());

        let orphan = students.save(None, ana(99)).await.expect("Failed to insert student");
        service(&db).delete_student(orphan.id).await.expect("orphans are not guarded");
        assert!(!students.exists_by_id(orphan.id).await.expect("exists query failed"));
    }

    #[tokio::test]
    async fn test_delete_missing_student() {
        let db = setup_test_db().await;
        let err = service(&db).delete_student(1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_course_existence_and_deletion() {
        let db = setup_test_db().await;
        let courses = CourseRepository::new(db.clone());
        let students = StudentRepository::new(db.clone());
        let service = service(&db);

        assert!(matches!(
            service.ensure_course_exists(1).await,
            Err(AppError::BadRequest(_))
        ));

        let course = courses.save(None, math(false)).await.expect("Failed to insert course");
        service.ensure_course_exists(course.id).await.expect("course exists");

        let student = students.save(None, ana(course.id)).await.expect("Failed to insert student");
        assert!(matches!(
            service.delete_course(course.id).await,
            Err(AppError::Conflict(_))
        ));

        service.delete_student(student.id).await.expect("inactive course does not guard");
        service.delete_course(course.id).await.expect("empty course can be deleted");
        assert!(matches!(
            service.delete_course(course.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
