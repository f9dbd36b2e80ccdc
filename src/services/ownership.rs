use std::sync::Arc;

use crate::auth::Identity;
use crate::database::FormStore;
use crate::types::{parse_id, DomainError, DomainResult, RecordId};

/// Single gate deciding whether the caller owns a form.
///
/// The check order is fixed: parse the id, confirm the form exists, then
/// require an identity, then compare owner ids. Nothing is cached between
/// calls; every protected operation re-evaluates ownership.
#[derive(Clone)]
pub struct OwnershipValidator {
    forms: Arc<dyn FormStore>,
}

impl OwnershipValidator {
    pub fn new(forms: Arc<dyn FormStore>) -> Self {
        Self { forms }
    }

    /// Validate ownership of a form id received at the API boundary
    pub async fn validate_is_owner(&self, identity: &Identity, form_id: &str) -> DomainResult<()> {
        let form_id = parse_id(form_id)?;
        self.validate_owner_of(identity, form_id).await
    }

    /// Same check for an id that is already parsed, e.g. the form id of a
    /// question or pool answer that was just resolved from storage
    pub async fn validate_owner_of(&self, identity: &Identity, form_id: RecordId) -> DomainResult<()> {
        let owner_id = self.forms.get_by_id(form_id).await?.user_id;

        let principal = identity.principal()?;

        if principal.user_id != owner_id {
            tracing::warn!(
                "Ownership check failed: user {} is not the owner of form {}",
                principal.user_id,
                form_id
            );
            return Err(DomainError::Forbidden);
        }

        Ok(())
    }
}
