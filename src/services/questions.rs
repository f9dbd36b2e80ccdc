use std::sync::Arc;

use crate::auth::Identity;
use crate::database::models::{NewQuestion, Question, QuestionUpdate};
use crate::database::QuestionStore;
use crate::services::ownership::OwnershipValidator;
use crate::types::{parse_id, DomainError, DomainResult, Pagination};

#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionStore>,
    ownership: OwnershipValidator,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionStore>, ownership: OwnershipValidator) -> Self {
        Self { questions, ownership }
    }

    pub async fn create(&self, identity: &Identity, form_id: &str, header: String) -> DomainResult<Question> {
        self.ownership.validate_is_owner(identity, form_id).await?;

        if header.trim().is_empty() {
            return Err(DomainError::InvalidContent);
        }

        self.questions
            .create(NewQuestion {
                form_id: parse_id(form_id)?,
                header,
            })
            .await
    }

    /// Open to any caller that reached the protected tier
    pub async fn list_by_form(&self, form_id: &str, page: Pagination) -> DomainResult<Vec<Question>> {
        let form_id = parse_id(form_id)?;
        self.questions.get_by_form_id(form_id, page).await
    }

    pub async fn update(
        &self,
        identity: &Identity,
        form_id: &str,
        question_id: &str,
        header: String,
    ) -> DomainResult<Question> {
        self.ownership.validate_is_owner(identity, form_id).await?;

        if header.trim().is_empty() {
            return Err(DomainError::InvalidContent);
        }

        self.questions
            .update(QuestionUpdate {
                id: parse_id(question_id)?,
                form_id: parse_id(form_id)?,
                header,
            })
            .await
    }

    /// The request only names the question, so its form is resolved first
    /// and ownership is checked against that form.
    pub async fn delete(&self, identity: &Identity, question_id: &str) -> DomainResult<()> {
        let question = self.questions.get_by_id(parse_id(question_id)?).await?;

        self.ownership.validate_owner_of(identity, question.form_id).await?;

        self.questions.delete(question.id).await
    }
}
