use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Chapter, Interest};

/// A course row joined with one of its interests, plus its chapters.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseDetails {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub instructor: Option<String>,
    pub duration: Option<i64>,
    pub level: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "interestId")]
    pub interest_id: Option<String>,
    pub category: Option<String>,
    #[sqlx(skip)]
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[sqlx(skip)]
    #[serde(default)]
    pub categories: Vec<Interest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub categories: Option<Vec<CategoryInput>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}
