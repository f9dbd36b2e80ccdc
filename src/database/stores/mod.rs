//! Postgres-backed store implementations, one per table.

pub mod answer;
pub mod form;
pub mod pool_answer;
pub mod question;
pub mod user;

pub use answer::PgAnswerStore;
pub use form::PgFormStore;
pub use pool_answer::PgPoolAnswerStore;
pub use question::PgQuestionStore;
pub use user::PgUserStore;
