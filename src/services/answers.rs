use std::sync::Arc;

use crate::auth::Identity;
use crate::database::models::{Answer, PoolAnswer};
use crate::database::{AnswerStore, PoolAnswerStore};
use crate::services::ownership::OwnershipValidator;
use crate::types::{parse_id, DomainError, DomainResult, Pagination};

#[derive(Clone)]
pub struct AnswerService {
    pool_answers: Arc<dyn PoolAnswerStore>,
    answers: Arc<dyn AnswerStore>,
    ownership: OwnershipValidator,
}

impl AnswerService {
    pub fn new(
        pool_answers: Arc<dyn PoolAnswerStore>,
        answers: Arc<dyn AnswerStore>,
        ownership: OwnershipValidator,
    ) -> Self {
        Self {
            pool_answers,
            answers,
            ownership,
        }
    }

    /// Answers of one pool answer, for the owner of its form.
    ///
    /// The pool answer is resolved first to learn its form. When the caller
    /// also names a form (as the nested route does) the two must agree.
    pub async fn list_for_pool_answer(
        &self,
        identity: &Identity,
        form_id: Option<&str>,
        pool_answer_id: &str,
        page: Pagination,
    ) -> DomainResult<(PoolAnswer, Vec<Answer>)> {
        let expected_form = form_id.map(parse_id).transpose()?;
        let pool_answer = self.pool_answers.get_by_id(parse_id(pool_answer_id)?).await?;

        if expected_form.is_some_and(|form_id| form_id != pool_answer.form_id) {
            return Err(DomainError::InvalidContent);
        }

        self.ownership.validate_owner_of(identity, pool_answer.form_id).await?;

        let answers = self.answers.get_by_pool_answer_id(pool_answer.id, page).await?;
        Ok((pool_answer, answers))
    }
}
