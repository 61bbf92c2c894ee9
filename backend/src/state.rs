use std::sync::Arc;

use sqlx::SqlitePool;

use crate::services::{CourseSetupModel, SqliteCourseSetupModel};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub courses: Arc<dyn CourseSetupModel>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let courses = Arc::new(SqliteCourseSetupModel::new(db.clone()));
        Self { db, courses }
    }
}
