use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::RecordId;

/// One respondent's submission session against a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PoolAnswer {
    #[sqlx(rename = "id_")]
    pub id: RecordId,
    #[sqlx(rename = "user_id_")]
    pub user_id: RecordId,
    #[sqlx(rename = "form_id_")]
    pub form_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoolAnswer {
    pub user_id: RecordId,
    pub form_id: RecordId,
}
