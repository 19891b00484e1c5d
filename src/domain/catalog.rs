use {
    super::{
        audit::AuditLogEntry,
        error::AdminError,
        id::DocumentId,
        product::{Product, ProductDraft},
        session::Session,
    },
    std::{future::Future, pin::Pin},
};

pub type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AdminError>> + Send + 'a>>;

/// The upstream content API. A 401 from any authenticated call surfaces as
/// [`AdminError::AuthExpired`].
pub trait CatalogApi: Send + Sync {
    fn login<'a>(&'a self, identifier: &'a str, password: &'a str) -> CatalogFuture<'a, Session>;

    fn fetch_audit_logs<'a>(&'a self, token: &'a str) -> CatalogFuture<'a, Vec<AuditLogEntry>>;

    fn list_products<'a>(&'a self, token: &'a str) -> CatalogFuture<'a, Vec<Product>>;

    fn create_product<'a>(
        &'a self,
        token: &'a str,
        draft: &'a ProductDraft,
    ) -> CatalogFuture<'a, Product>;

    fn update_product<'a>(
        &'a self,
        token: &'a str,
        id: &'a DocumentId,
        draft: &'a ProductDraft,
    ) -> CatalogFuture<'a, Product>;

    fn delete_product<'a>(&'a self, token: &'a str, id: &'a DocumentId) -> CatalogFuture<'a, ()>;
}
