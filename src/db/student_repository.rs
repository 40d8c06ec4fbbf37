use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{Student, StudentRequest};

use super::Repository;

#[derive(Clone)]
pub struct StudentRepository {
    db: SqlitePool,
}

impl StudentRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn find_by_course_id(&self, course_id: i64) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email, age, national_id, course_id FROM students WHERE course_id = ? ORDER BY id"
        )
        .bind(course_id)
        .fetch_all(&self.db)
        .await
    }

    pub async fn count_by_course_id(&self, course_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE course_id = ?")
            .bind(course_id)
            .fetch_one(&self.db)
            .await
    }
}

#[async_trait]
impl Repository for StudentRepository {
    type Entity = Student;
    type Draft = StudentRequest;

    const ENTITY: &'static str = "student";

    async fn save(&self, id: Option<i64>, draft: StudentRequest) -> Result<Student, sqlx::Error> {
        let id = match id {
            None => sqlx::query(
                "INSERT INTO students (first_name, last_name, email, age, national_id, course_id) VALUES (?, ?, ?, ?, ?, ?)"
            )
            .bind(&draft.first_name)
            .bind(&draft.last_name)
            .bind(&draft.email)
            .bind(draft.age)
            .bind(draft.national_id)
            .bind(draft.course_id)
            .execute(&self.db)
            .await?
            .last_insert_rowid(),
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO students (id, first_name, last_name, email, age, national_id, course_id)
                    VALUES (?, ?, ?, ?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        first_name = excluded.first_name,
                        last_name = excluded.last_name,
                        email = excluded.email,
                        age = excluded.age,
                        national_id = excluded.national_id,
                        course_id = excluded.course_id
                    "#
                )
                .bind(id)
                .bind(&draft.first_name)
                .bind(&draft.last_name)
                .bind(&draft.email)
                .bind(draft.age)
                .bind(draft.national_id)
                .bind(draft.course_id)
                .execute(&self.db)
                .await?;
                id
            }
        };
        debug!("saved student {} (course {})", id, draft.course_id);

        self.find_by_id(id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn find_all(&self) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email, age, national_id, course_id FROM students ORDER BY id"
        )
        .fetch_all(&self.db)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email, age, national_id, course_id FROM students WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.db)
            .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();
        debug!("deleted student {} ({} rows)", id, result);

        Ok(result > 0)
    }
}
