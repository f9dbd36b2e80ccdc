pub mod manager;
pub mod models;
pub mod repository;
pub mod stores;

pub use manager::{DatabaseError, DatabaseManager};
pub use repository::{AnswerStore, FormStore, PoolAnswerStore, QuestionStore, Stores, UserStore};
