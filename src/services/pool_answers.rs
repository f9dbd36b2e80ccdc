use std::sync::Arc;

use crate::auth::Identity;
use crate::database::models::{Answer, AnswerInput, NewPoolAnswer, PoolAnswer};
use crate::database::{AnswerStore, PoolAnswerStore};
use crate::services::ownership::OwnershipValidator;
use crate::services::saga::Saga;
use crate::types::{parse_id, DomainResult, Pagination};

/// A stored submission: the pool answer and its answers in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub pool_answer: PoolAnswer,
    pub answers: Vec<Answer>,
}

#[derive(Clone)]
pub struct PoolAnswerService {
    pool_answers: Arc<dyn PoolAnswerStore>,
    answers: Arc<dyn AnswerStore>,
    ownership: OwnershipValidator,
}

impl PoolAnswerService {
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

    /// Submit answers to a form as the current principal. Any authenticated
    /// user may respond to any form, any number of times.
    pub async fn submit(&self, identity: &Identity, form_id: &str, answers: Vec<AnswerInput>) -> DomainResult<Submission> {
        let form_id = parse_id(form_id)?;
        let principal = identity.principal()?;

        self.create_submission(
            NewPoolAnswer {
                user_id: principal.user_id,
                form_id,
            },
            answers,
        )
        .await
    }

    /// Create the pool answer, then each answer in order. The first failing
    /// answer insert deletes the pool answer again and its error is returned
    /// as is. Answers inserted before the failure are not removed here.
    pub async fn create_submission(&self, pool_answer: NewPoolAnswer, answers: Vec<AnswerInput>) -> DomainResult<Submission> {
        let pool_answer = self.pool_answers.create(pool_answer).await?;

        let mut saga = Saga::new("create_submission");
        let store = Arc::clone(&self.pool_answers);
        let pool_answer_id = pool_answer.id;
        saga.on_failure("delete pool answer", move || async move { store.delete(pool_answer_id).await });

        let mut created = Vec::with_capacity(answers.len());
        for answer in answers {
            match self.answers.create(answer.attach(pool_answer.id)).await {
                Ok(answer) => created.push(answer),
                Err(err) => return Err(saga.abort(err).await),
            }
        }

        saga.commit();

        tracing::debug!(
            "Pool answer {} stored with {} answer(s) for form {}",
            pool_answer.id,
            created.len(),
            pool_answer.form_id
        );

        Ok(Submission {
            pool_answer,
            answers: created,
        })
    }

    pub async fn get_by_id(&self, pool_answer_id: &str) -> DomainResult<PoolAnswer> {
        self.pool_answers.get_by_id(parse_id(pool_answer_id)?).await
    }

    /// Who responded to a form. Owner only.
    pub async fn list_by_form(&self, identity: &Identity, form_id: &str, page: Pagination) -> DomainResult<Vec<PoolAnswer>> {
        self.ownership.validate_is_owner(identity, form_id).await?;
        self.pool_answers.get_by_form_id(parse_id(form_id)?, page).await
    }
}
