//! Shared types used across the codebase

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for every entity. Travels as a decimal string over HTTP.
pub type RecordId = i64;

/// Error taxonomy shared by stores, the ownership validator and use cases.
///
/// Storage failures that do not fall into one of the named kinds are carried
/// as `Storage` with the driver's message; they are propagated unchanged and
/// never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid content")]
    InvalidContent,

    #[error("content not found")]
    ContentNotFound,

    #[error("user unauthenticated")]
    Unauthenticated,

    #[error("user not an owner")]
    Forbidden,

    #[error("login already exists")]
    Conflict,

    #[error("invalid access token")]
    InvalidAccessToken,

    #[error("invalid password")]
    InvalidPassword,

    #[error("storage error: {0}")]
    Storage(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Parse an identifier received at the API boundary.
/// Runs before any I/O so malformed ids never reach storage.
pub fn parse_id(raw: &str) -> DomainResult<RecordId> {
    raw.trim()
        .parse::<RecordId>()
        .map_err(|_| DomainError::InvalidContent)
}

/// Flat limit/offset pagination for list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Validate raw query parameters. Both must be present, `limit >= 1`
    /// and `offset >= 0`; anything else is `None`.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Option<Self> {
        let limit: i64 = limit?.trim().parse().ok()?;
        let offset: i64 = offset?.trim().parse().ok()?;

        if limit < 1 || offset < 0 {
            return None;
        }

        Some(Self::new(limit as u64, offset as u64))
    }

    /// Clamp the limit to a configured maximum
    pub fn capped(self, max_limit: u64) -> Self {
        Self {
            limit: self.limit.min(max_limit),
            offset: self.offset,
        }
    }

    /// Values in the shape Postgres LIMIT/OFFSET binds expect
    pub fn as_sql(&self) -> (i64, i64) {
        (
            i64::try_from(self.limit).unwrap_or(i64::MAX),
            i64::try_from(self.offset).unwrap_or(i64::MAX),
        )
    }

    /// Apply to an in-memory iterator
    pub fn window<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}
