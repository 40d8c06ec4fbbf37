use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{Course, CourseRequest};

use super::Repository;

#[derive(Clone)]
pub struct CourseRepository {
    db: SqlitePool,
}

impl CourseRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for CourseRepository {
    type Entity = Course;
    type Draft = CourseRequest;

    const ENTITY: &'static str = "course";

    async fn save(&self, id: Option<i64>, draft: CourseRequest) -> Result<Course, sqlx::Error> {
        let id = match id {
            None => sqlx::query(
                "INSERT INTO courses (title, description, workload_hours, exercise_count, active) VALUES (?, ?, ?, ?, ?)"
            )
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.workload_hours)
            .bind(draft.exercise_count)
            .bind(draft.active)
            .execute(&self.db)
            .await?
            .last_insert_rowid(),
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO courses (id, title, description, workload_hours, exercise_count, active)
                    VALUES (?, ?, ?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        title = excluded.title,
                        description = excluded.description,
                        workload_hours = excluded.workload_hours,
                        exercise_count = excluded.exercise_count,
                        active = excluded.active
                    "#
                )
                .bind(id)
                .bind(&draft.title)
                .bind(&draft.description)
                .bind(draft.workload_hours)
                .bind(draft.exercise_count)
                .bind(draft.active)
                .execute(&self.db)
                .await?;
                id
            }
        };
        debug!("saved course {}", id);

        self.find_by_id(id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn find_all(&self) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            "SELECT id, title, description, workload_hours, exercise_count, active FROM courses ORDER BY id"
        )
        .fetch_all(&self.db)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            "SELECT id, title, description, workload_hours, exercise_count, active FROM courses WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.db)
            .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();
        debug!("deleted course {} ({} rows)", id, result);

        Ok(result > 0)
    }
}
