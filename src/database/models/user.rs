use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[sqlx(rename = "id_")]
    pub id: RecordId,
    #[sqlx(rename = "login_")]
    pub login: String,
    #[serde(skip_serializing)]
    #[sqlx(rename = "password_")]
    pub password_hash: String,
}

/// Sign-up payload after the password has been hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub password_hash: String,
}
