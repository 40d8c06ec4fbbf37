mod courses;
mod students;

use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::db::Repository;
use crate::error::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/courses", get(courses::list_courses).post(courses::create_course))
        .route(
            "/api/courses/{id}",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route("/api/courses/{id}/students", get(courses::list_course_students))
        .route("/api/students", get(students::list_students).post(students::create_student))
        .route(
            "/api/students/{id}",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn find_or_404<R: Repository>(repo: &R, id: i64) -> Result<R::Entity, AppError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {} not found", R::ENTITY, id)))
}

async fn ensure_exists<R: Repository>(repo: &R, id: i64) -> Result<(), AppError> {
    if repo.exists_by_id(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("{} {} not found", R::ENTITY, id)))
    }
}
