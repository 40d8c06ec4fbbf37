use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

use super::check_max_length;

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub workload_hours: i32,
    pub exercise_count: i32,
    pub active: bool,
}

/// Body of `POST /api/courses` and `PUT /api/courses/{id}`: every field but `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: String,
    pub description: String,
    pub workload_hours: i32,
    pub exercise_count: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl CourseRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_max_length("title", &self.title, TITLE_MAX_LEN)?;
        check_max_length("description", &self.description, DESCRIPTION_MAX_LEN)?;
        Ok(())
    }

    pub fn into_course(self, id: i64) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            workload_hours: self.workload_hours,
            exercise_count: self.exercise_count,
            active: self.active,
        }
    }
}
