use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use crate::db::Repository;
use crate::error::AppError;
use crate::models::{Course, CourseRequest, Student};
use crate::state::AppState;

use super::{ensure_exists, find_or_404};

pub(super) async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.courses.find_all().await?;
    Ok(Json(courses))
}

pub(super) async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CourseRequest>
) -> Result<(StatusCode, Json<Course>), AppError> {
    req.validate()?;
    let course = state.courses.save(None, req).await?;
    info!("created course {}", course.id);
    Ok((StatusCode::CREATED, Json(course)))
}

pub(super) async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>
) -> Result<Json<Course>, AppError> {
    let course = find_or_404(&state.courses, id).await?;
    Ok(Json(course))
}

pub(super) async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CourseRequest>
) -> Result<Json<Course>, AppError> {
    ensure_exists(&state.courses, id).await?;
    req.validate()?;
    let course = state.courses.save(Some(id), req).await?;
    info!("updated course {} (active: {})", id, course.active);
    Ok(Json(course))
}

pub(super) async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>
) -> Result<StatusCode, AppError> {
    state.enrollment.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn list_course_students(
    State(state): State<AppState>,
    Path(id): Path<i64>
) -> Result<Json<Vec<Student>>, AppError> {
    ensure_exists(&state.courses, id).await?;
    let students = state.students.find_by_course_id(id).await?;
    Ok(Json(students))
}
