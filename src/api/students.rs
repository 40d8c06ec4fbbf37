use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use crate::db::Repository;
use crate::error::AppError;
use crate::models::{Student, StudentRequest};
use crate::state::AppState;

use super::{ensure_exists, find_or_404};

pub(super) async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.find_all().await?;
    Ok(Json(students))
}

pub(super) async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<StudentRequest>
) -> Result<(StatusCode, Json<Student>), AppError> {
    req.validate()?;
    state.enrollment.ensure_course_exists(req.course_id).await?;
    let student = state.students.save(None, req).await?;
    info!("created student {} in course {}", student.id, student.course_id);
    Ok((StatusCode::CREATED, Json(student)))
}

pub(super) async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>
) -> Result<Json<Student>, AppError> {
    let student = find_or_404(&state.students, id).await?;
    Ok(Json(student))
}

pub(super) async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<StudentRequest>
) -> Result<Json<Student>, AppError> {
    ensure_exists(&state.students, id).await?;
    req.validate()?;
    state.enrollment.ensure_course_exists(req.course_id).await?;
    let student = state.students.save(Some(id), req).await?;
    info!("updated student {}", id);
    Ok(Json(student))
}

pub(super) async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>
) -> Result<StatusCode, AppError> {
    state.enrollment.delete_student(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
