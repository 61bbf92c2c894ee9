use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Chapter {
    pub id: String,
    pub title: Option<String>,
    pub video_link: Option<String>,
    pub text_note: Option<String>,
    pub order: Option<i64>,
}

/// Incoming chapter; missing fields are stored as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChapterInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
    #[serde(default)]
    pub text_note: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}
