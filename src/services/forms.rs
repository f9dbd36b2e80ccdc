use std::sync::Arc;

use crate::auth::Identity;
use crate::database::models::{Form, FormUpdate, NewForm};
use crate::database::FormStore;
use crate::services::ownership::OwnershipValidator;
use crate::types::{parse_id, DomainError, DomainResult, Pagination};

/// Fields a caller may change on a form. The owner is never one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone)]
pub struct FormService {
    forms: Arc<dyn FormStore>,
    ownership: OwnershipValidator,
}

impl FormService {
    pub fn new(forms: Arc<dyn FormStore>, ownership: OwnershipValidator) -> Self {
        Self { forms, ownership }
    }

    /// New form owned by the current principal
    pub async fn create(&self, identity: &Identity, title: String, description: String) -> DomainResult<Form> {
        let principal = identity.principal()?;

        if title.trim().is_empty() {
            return Err(DomainError::InvalidContent);
        }

        let form = self
            .forms
            .create(NewForm {
                user_id: principal.user_id,
                title,
                description,
            })
            .await?;

        tracing::debug!("Form {} created by user {}", form.id, form.user_id);
        Ok(form)
    }

    pub async fn get_by_id(&self, form_id: &str) -> DomainResult<Form> {
        let form_id = parse_id(form_id)?;
        self.forms.get_by_id(form_id).await
    }

    /// Forms owned by the current principal
    pub async fn list_own(&self, identity: &Identity, page: Pagination) -> DomainResult<Vec<Form>> {
        let principal = identity.principal()?;
        self.forms.get_by_user_id(principal.user_id, page).await
    }

    /// Owner-only. The stored owner is re-stamped from the current identity,
    /// so a payload can never hand the form to someone else.
    pub async fn update(&self, identity: &Identity, form_id: &str, patch: FormPatch) -> DomainResult<Form> {
        self.ownership.validate_is_owner(identity, form_id).await?;

        if patch.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
            return Err(DomainError::InvalidContent);
        }

        let principal = identity.principal()?;
        let update = FormUpdate {
            id: parse_id(form_id)?,
            user_id: principal.user_id,
            title: patch.title,
            description: patch.description,
        };

        self.forms.update(update).await
    }

    /// Owner-only. Questions and pool answers are left to the database's
    /// foreign keys.
    pub async fn delete(&self, identity: &Identity, form_id: &str) -> DomainResult<()> {
        self.ownership.validate_is_owner(identity, form_id).await?;
        self.forms.delete(parse_id(form_id)?).await?;

        tracing::info!("Form {} deleted", form_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{identity_of, MemoryStores};

    fn service(stores: &MemoryStores) -> FormService {
        FormService::new(stores.forms.clone(), OwnershipValidator::new(stores.forms.clone()))
    }

    #[tokio::test]
    async fn create_then_read_back() {
        let stores = MemoryStores::new();
        let alice = stores.seed_user("alice").await;
        let forms = service(&stores);

        let created = forms
            .create(&identity_of(&alice), "Capitals".into(), "Geography quiz".into())
            .await
            .unwrap();
        let found = forms.get_by_id(&created.id.to_string()).await.unwrap();

        assert_eq!(found, created);
        assert_eq!(found.user_id, alice.id);
        assert_eq!(found.title, "Capitals");
        assert_eq!(found.description, "Geography quiz");
    }

    #[tokio::test]
    async fn create_requires_identity() {
        let stores = MemoryStores::new();
        let result = service(&stores)
            .create(&Identity::Anonymous, "t".into(), "d".into())
            .await;
        assert_eq!(result, Err(DomainError::Unauthenticated));
    }

    #[tokio::test]
    async fn list_own_only_returns_callers_forms() {
        let stores = MemoryStores::new();
        let alice = stores.seed_user("alice").await;
        let bob = stores.seed_user("bob").await;
        stores.seed_form(alice.id, "a1").await;
        stores.seed_form(bob.id, "b1").await;
        stores.seed_form(alice.id, "a2").await;

        let mine = service(&stores)
            .list_own(&identity_of(&alice), Pagination::new(10, 0))
            .await
            .unwrap();
        let titles: Vec<_> = mine.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn list_with_zero_limit_is_empty() {
        let stores = MemoryStores::new();
        let alice = stores.seed_user("alice").await;

        let forms = service(&stores)
            .list_own(&identity_of(&alice), Pagination::new(0, 0))
            .await
            .unwrap();
        assert!(forms.is_empty());
    }

    #[tokio::test]
    async fn update_keeps_owner_from_identity() {
        let stores = MemoryStores::new();
        let alice = stores.seed_user("alice").await;
        let form = stores.seed_form(alice.id, "Old").await;

        let updated = service(&stores)
            .update(
                &identity_of(&alice),
                &form.id.to_string(),
                FormPatch {
                    title: Some("New".into()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.description, form.description);
        assert_eq!(updated.user_id, alice.id);
    }

    #[tokio::test]
    async fn update_rejects_blank_title_like_create() {
        let stores = MemoryStores::new();
        let alice = stores.seed_user("alice").await;
        let form = stores.seed_form(alice.id, "Kept").await;
        let forms = service(&stores);

        let result = forms
            .update(
                &identity_of(&alice),
                &form.id.to_string(),
                FormPatch {
                    title: Some("  ".into()),
                    description: Some("changed".into()),
                },
            )
            .await;
        assert_eq!(result, Err(DomainError::InvalidContent));

        let stored = forms.get_by_id(&form.id.to_string()).await.unwrap();
        assert_eq!(stored, form);
    }

    #[tokio::test]
    async fn update_by_non_owner_is_forbidden_and_changes_nothing() {
        let stores = MemoryStores::new();
        let alice = stores.seed_user("alice").await;
        let mallory = stores.seed_user("mallory").await;
        let form = stores.seed_form(alice.id, "Mine").await;
        let forms = service(&stores);

        let result = forms
            .update(
                &identity_of(&mallory),
                &form.id.to_string(),
                FormPatch {
                    title: Some("Stolen".into()),
                    description: None,
                },
            )
            .await;
        assert_eq!(result, Err(DomainError::Forbidden));

        let stored = forms.get_by_id(&form.id.to_string()).await.unwrap();
        assert_eq!(stored, form);
    }

    #[tokio::test]
    async fn delete_by_owner_removes_form() {
        let stores = MemoryStores::new();
        let alice = stores.seed_user("alice").await;
        let form = stores.seed_form(alice.id, "Temp").await;
        let forms = service(&stores);

        forms.delete(&identity_of(&alice), &form.id.to_string()).await.unwrap();

        assert_eq!(
            forms.get_by_id(&form.id.to_string()).await,
            Err(DomainError::ContentNotFound)
        );
    }

    #[tokio::test]
    async fn delete_missing_form_is_not_found() {
        let stores = MemoryStores::new();
        let alice = stores.seed_user("alice").await;

        let result = service(&stores).delete(&identity_of(&alice), "404").await;
        assert_eq!(result, Err(DomainError::ContentNotFound));
    }
}
