pub mod answer;
pub mod form;
pub mod pool_answer;
pub mod question;
pub mod user;

pub use answer::{Answer, AnswerInput, NewAnswer};
pub use form::{Form, FormUpdate, NewForm};
pub use pool_answer::{NewPoolAnswer, PoolAnswer};
pub use question::{NewQuestion, Question, QuestionUpdate};
pub use user::{NewUser, User};
