use {
    super::auth::{bearer_token, clear_on_expiry},
    crate::domain::{
        catalog::CatalogApi,
        error::AdminError,
        id::DocumentId,
        product::{Product, ProductDraft},
        session::SessionStore,
    },
};

pub async fn list_products(
    api: &dyn CatalogApi,
    session: &dyn SessionStore,
) -> Result<Vec<Product>, AdminError> {
    let token = bearer_token(session)?;
    clear_on_expiry(session, api.list_products(&token).await)
}

pub async fn create_product(
    api: &dyn CatalogApi,
    session: &dyn SessionStore,
    draft: &ProductDraft,
) -> Result<Product, AdminError> {
    draft.validate()?;
    let token = bearer_token(session)?;
    let created = clear_on_expiry(session, api.create_product(&token, draft).await)?;
    tracing::info!(document_id = %created.document_id, category = %draft.category, "product created");
    Ok(created)
}

pub async fn update_product(
    api: &dyn CatalogApi,
    session: &dyn SessionStore,
    id: &DocumentId,
    draft: &ProductDraft,
) -> Result<Product, AdminError> {
    draft.validate()?;
    let token = bearer_token(session)?;
    let updated = clear_on_expiry(session, api.update_product(&token, id, draft).await)?;
    tracing::info!(document_id = %id, category = %draft.category, "product updated");
    Ok(updated)
}

pub async fn delete_product(
    api: &dyn CatalogApi,
    session: &dyn SessionStore,
    id: &DocumentId,
) -> Result<(), AdminError> {
    let token = bearer_token(session)?;
    clear_on_expiry(session, api.delete_product(&token, id).await)?;
    tracing::info!(document_id = %id, "product deleted");
    Ok(())
}
