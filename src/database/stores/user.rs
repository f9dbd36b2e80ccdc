use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{NewUser, User};
use crate::database::repository::UserStore;
use crate::types::{DomainResult, RecordId};

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> DomainResult<User> {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO user_ (login_, password_) VALUES ($1, $2)
             RETURNING id_, login_, password_",
        )
        .bind(&user.login)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_by_login(&self, login: &str) -> DomainResult<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id_, login_, password_ FROM user_ WHERE login_ = $1",
        )
        .bind(login)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id_, login_, password_ FROM user_ WHERE id_ = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
