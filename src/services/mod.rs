pub mod answers;
pub mod auth;
pub mod forms;
pub mod ownership;
pub mod pool_answers;
pub mod questions;
pub mod saga;

pub use answers::AnswerService;
pub use auth::AuthService;
pub use forms::{FormPatch, FormService};
pub use ownership::OwnershipValidator;
pub use pool_answers::{PoolAnswerService, Submission};
pub use questions::QuestionService;
pub use saga::Saga;

use crate::auth::JwtIssuer;
use crate::database::Stores;

/// Every use case, wired to one set of stores
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub forms: FormService,
    pub questions: QuestionService,
    pub pool_answers: PoolAnswerService,
    pub answers: AnswerService,
}

impl Services {
    pub fn new(stores: Stores, jwt: JwtIssuer) -> Self {
        let ownership = OwnershipValidator::new(stores.forms.clone());

        Self {
            auth: AuthService::new(stores.users, jwt),
            forms: FormService::new(stores.forms, ownership.clone()),
            questions: QuestionService::new(stores.questions, ownership.clone()),
            pool_answers: PoolAnswerService::new(stores.pool_answers.clone(), stores.answers.clone(), ownership.clone()),
            answers: AnswerService::new(stores.pool_answers, stores.answers, ownership),
        }
    }
}
