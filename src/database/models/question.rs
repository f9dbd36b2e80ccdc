use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    #[sqlx(rename = "id_")]
    pub id: RecordId,
    #[sqlx(rename = "form_id_")]
    pub form_id: RecordId,
    #[sqlx(rename = "header_")]
    pub header: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub form_id: RecordId,
    pub header: String,
}

/// Header change for an existing question. `form_id` is only used to
/// authorize the caller; a question never moves between forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionUpdate {
    pub id: RecordId,
    pub form_id: RecordId,
    pub header: String,
}
