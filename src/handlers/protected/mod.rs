// handlers/protected/mod.rs - Handlers behind the bearer gate
//
// Route prefix: /api/v1
// Every handler here receives an `Identity` resolved by
// `middleware::bearer_auth_middleware`.

pub mod forms; // /api/v1/forms[/:formid]
pub mod pool_answers; // /api/v1/forms/:formid/poolsanswer[/:poolanswerid]
pub mod questions; // /api/v1/forms/:formid/questions[/:questionid]
pub mod users; // /api/v1/users/:id
