use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

use crate::types::{DomainError, DomainResult};

// Minimum cost under test so fixtures stay fast
#[cfg(not(test))]
const HASH_COST: u32 = DEFAULT_COST;
#[cfg(test)]
const HASH_COST: u32 = 4;

impl From<BcryptError> for DomainError {
    fn from(err: BcryptError) -> Self {
        tracing::error!("Password hashing error: {}", err);
        DomainError::Storage(err.to_string())
    }
}

/// Bcrypt hash in modular crypt format (`$2b$<cost>$...`)
pub fn hash_password(password: &str) -> DomainResult<String> {
    Ok(hash(password, HASH_COST)?)
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable
pub fn verify_password(password: &str, stored: &str) -> DomainResult<bool> {
    Ok(verify(password, stored)?)
}
