use crate::types::{DomainError, DomainResult, RecordId};

/// The authenticated caller, as established by the bearer-token gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: RecordId,
    pub login: String,
}

impl Principal {
    pub fn new(user_id: RecordId, login: impl Into<String>) -> Self {
        Self {
            user_id,
            login: login.into(),
        }
    }
}

/// Who is making the current call. Decided once at the request boundary and
/// threaded explicitly through every protected operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Authenticated(Principal),
    Anonymous,
}

impl Identity {
    pub fn of(principal: Principal) -> Self {
        Identity::Authenticated(principal)
    }

    /// The principal, or `Unauthenticated` when nobody is attached
    pub fn principal(&self) -> DomainResult<&Principal> {
        match self {
            Identity::Authenticated(principal) => Ok(principal),
            Identity::Anonymous => Err(DomainError::Unauthenticated),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated(_))
    }
}

impl From<Option<Principal>> for Identity {
    fn from(principal: Option<Principal>) -> Self {
        principal.map_or(Identity::Anonymous, Identity::Authenticated)
    }
}
