use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::RecordId;

/// A quiz definition. The owner is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Form {
    #[sqlx(rename = "id_")]
    pub id: RecordId,
    #[sqlx(rename = "user_id_")]
    pub user_id: RecordId,
    #[sqlx(rename = "title_")]
    pub title: String,
    #[sqlx(rename = "description_")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewForm {
    pub user_id: RecordId,
    pub title: String,
    pub description: String,
}

/// Partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormUpdate {
    pub id: RecordId,
    pub user_id: RecordId,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl FormUpdate {
    pub fn apply_to(&self, form: &mut Form) {
        form.user_id = self.user_id;
        if let Some(title) = &self.title {
            form.title = title.clone();
        }
        if let Some(description) = &self.description {
            form.description = description.clone();
        }
    }
}
