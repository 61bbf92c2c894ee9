use axum::Json;
use axum::extract::Path;
use axum::routing::put;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tracing::error;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses/{id}/setup", get(get_course_setup).put(update_course_setup))
        .route("/courses/{id}/chapters", put(update_chapters))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await.map_err(|e| {
        error!("health check failed: {}", e);
        e
    })?;
    Ok(StatusCode::OK)
}

async fn get_course_setup(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseDetails>, AppError> {
    let details = state
        .courses
        .get_course_details(&id)
        .await
        .map_err(|e| {
            error!("Error fetching course details for courseId {}: {}", id, e);
            e
        })?
        .ok_or(AppError::NotFound)?;
    Ok(Json(details))
}

async fn update_course_setup(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut req): Json<UpdateCourseRequest>,
) -> Result<StatusCode, AppError> {
    for category in req.categories.iter_mut().flatten() {
        if category.id.is_empty() {
            category.id = Uuid::new_v4().to_string();
        }
    }
    state.courses.update_course_details(&id, &req).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_chapters(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut chapters): Json<Vec<ChapterInput>>,
) -> Result<StatusCode, AppError> {
    for chapter in chapters.iter_mut() {
        if chapter.id.is_empty() {
            chapter.id = Uuid::new_v4().to_string();
        }
    }
    state.courses.update_chapters(&id, &chapters).await?;
    Ok(StatusCode::NO_CONTENT)
}
