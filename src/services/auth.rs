use std::sync::Arc;

use crate::auth::{hash_password, verify_password, JwtIssuer, Principal};
use crate::database::models::{NewUser, User};
use crate::database::UserStore;
use crate::types::{parse_id, DomainError, DomainResult};

/// Sign-up, sign-in and bearer token resolution
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt: JwtIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, jwt: JwtIssuer) -> Self {
        Self { users, jwt }
    }

    pub async fn sign_up(&self, login: &str, password: &str) -> DomainResult<User> {
        let login = login.trim();
        if login.is_empty() || password.is_empty() {
            return Err(DomainError::InvalidContent);
        }

        let user = self
            .users
            .create(NewUser {
                login: login.to_string(),
                password_hash: hash_password(password)?,
            })
            .await?;

        tracing::info!("User {} signed up as '{}'", user.id, user.login);
        Ok(user)
    }

    /// Returns a fresh access token
    pub async fn sign_in(&self, login: &str, password: &str) -> DomainResult<String> {
        let user = match self.users.get_by_login(login.trim()).await {
            Ok(user) => user,
            Err(DomainError::ContentNotFound) => return Err(DomainError::Unauthenticated),
            Err(err) => return Err(err),
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!("Failed sign-in for user {}", user.id);
            return Err(DomainError::InvalidPassword);
        }

        Ok(self.jwt.issue(&user)?)
    }

    /// Resolve a bearer token to the principal it names. The user must still
    /// exist and carry the same login the token was issued for.
    pub async fn authenticate(&self, token: &str) -> DomainResult<Principal> {
        let claimed = self.jwt.parse(token)?;

        let user = match self.users.get_by_id(claimed.user_id).await {
            Ok(user) => user,
            Err(DomainError::ContentNotFound) => return Err(DomainError::InvalidAccessToken),
            Err(err) => return Err(err),
        };

        if user.login != claimed.login {
            return Err(DomainError::InvalidAccessToken);
        }

        Ok(claimed)
    }

    pub async fn get_user(&self, user_id: &str) -> DomainResult<User> {
        self.users.get_by_id(parse_id(user_id)?).await
    }
}
