use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Interest {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}
