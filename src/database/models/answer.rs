use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Answer {
    #[sqlx(rename = "id_")]
    pub id: RecordId,
    #[sqlx(rename = "question_id_")]
    pub question_id: RecordId,
    #[sqlx(rename = "pool_answer_id_")]
    pub pool_answer_id: RecordId,
    #[sqlx(rename = "value_")]
    pub value: String,
}

/// An answer as submitted, before it is attached to a pool answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerInput {
    pub question_id: RecordId,
    pub value: String,
}

impl AnswerInput {
    pub fn attach(self, pool_answer_id: RecordId) -> NewAnswer {
        NewAnswer {
            question_id: self.question_id,
            pool_answer_id,
            value: self.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub question_id: RecordId,
    pub pool_answer_id: RecordId,
    pub value: String,
}
