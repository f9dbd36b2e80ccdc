// handlers/public/auth/mod.rs - Token acquisition

use serde::Deserialize;

pub mod signin; // POST /api/v1/auth/signin
pub mod signup; // POST /api/v1/auth/signup

pub use signin::signin_post;
pub use signup::signup_post;

/// Body shared by sign-up and sign-in
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}
