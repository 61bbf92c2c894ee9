use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::course_setup;
use crate::error::AppError;
use crate::models::{ChapterInput, CourseDetails, UpdateCourseRequest};

/// Course setup operations as seen by the HTTP layer.
#[async_trait]
pub trait CourseSetupModel: Send + Sync {
    async fn get_course_details(&self, course_id: &str) -> Result<Option<CourseDetails>, AppError>;
    async fn update_course_details(
        &self,
        course_id: &str,
        req: &UpdateCourseRequest,
    ) -> Result<(), AppError>;
    async fn update_chapters(&self, course_id: &str, chapters: &[ChapterInput]) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct SqliteCourseSetupModel {
    db: SqlitePool,
}

impl SqliteCourseSetupModel {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseSetupModel for SqliteCourseSetupModel {
    async fn get_course_details(&self, course_id: &str) -> Result<Option<CourseDetails>, AppError> {
        Ok(course_setup::get_course_details(&self.db, course_id).await?)
    }

    async fn update_course_details(
        &self,
        course_id: &str,
        req: &UpdateCourseRequest,
    ) -> Result<(), AppError> {
        course_setup::update_course_details(&self.db, course_id, req).await?;
        Ok(())
    }

    async fn update_chapters(&self, course_id: &str, chapters: &[ChapterInput]) -> Result<(), AppError> {
        course_setup::update_chapters(&self.db, course_id, chapters).await?;
        Ok(())
    }
}
