#![allow(dead_code)]

use ayur_admin::domain::audit::{AuditActor, AuditLogEntry};
use ayur_admin::domain::catalog::{CatalogApi, CatalogFuture};
use ayur_admin::domain::error::AdminError;
use ayur_admin::domain::id::DocumentId;
use ayur_admin::domain::product::{Category, Product, ProductDraft};
use ayur_admin::domain::session::{Session, SessionUser};
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Build an audit entry with the fields the dedup key cares about.
pub fn entry(action: &str, doc: &str, changes: Value, previous: Value, ts: &str) -> AuditLogEntry {
    AuditLogEntry {
        id: 0,
        document_id: String::new(),
        action: action.into(),
        entity_type: "product".into(),
        entity_id: Some("1".into()),
        entity_document_id: Some(doc.into()),
        changes: Some(changes),
        previous_values: Some(previous),
        timestamp: ts.into(),
        created_at: Some(ts.into()),
        updated_at: Some(ts.into()),
        published_at: None,
        locale: None,
        actor: Some(AuditActor {
            id: Some(7),
            document_id: Some("usr7".into()),
            username: Some("vaidya".into()),
            email: Some("vaidya@example.com".into()),
        }),
    }
}

/// Same as [`entry`] but with a distinct record id.
pub fn entry_with_id(id: i64, action: &str, doc: &str, changes: Value, ts: &str) -> AuditLogEntry {
    AuditLogEntry {
        id,
        document_id: format!("log{id}"),
        ..entry(action, doc, changes, Value::Null, ts)
    }
}

pub fn test_user() -> SessionUser {
    SessionUser {
        id: 7,
        document_id: Some("usr7".into()),
        username: Some("vaidya".into()),
        email: Some("vaidya@example.com".into()),
    }
}

pub fn test_session() -> Session {
    Session {
        token: "jwt-token".into(),
        user: test_user(),
    }
}

pub fn product(doc: &str, name: &str) -> Product {
    Product {
        id: 1,
        document_id: DocumentId::new(doc).unwrap(),
        name: name.into(),
        category: Some(Category::Proprietary),
        description: Some("Herbal tablet".into()),
        proprietary_fields: None,
        classical_fields: None,
    }
}

pub fn draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.into(),
        category: Category::Classical,
        description: String::new(),
        proprietary_fields: None,
        classical_fields: None,
    }
}

/// In-memory stand-in for the content API.
#[derive(Default)]
pub struct FakeCatalog {
    pub logs: Mutex<Vec<AuditLogEntry>>,
    pub products: Mutex<Vec<Product>>,
    pub expired: AtomicBool,
    pub unavailable: AtomicBool,
    pub fetches: AtomicUsize,
    pub deleted: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_logs(logs: Vec<AuditLogEntry>) -> Self {
        Self {
            logs: Mutex::new(logs),
            ..Default::default()
        }
    }

    pub fn expire(&self) {
        self.expired.store(true, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn check(&self, token: &str) -> Result<(), AdminError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AdminError::Upstream {
                status: 500,
                message: "HTTP error! status: 500".into(),
            });
        }
        if self.expired.load(Ordering::SeqCst) || token != "jwt-token" {
            return Err(AdminError::AuthExpired);
        }
        Ok(())
    }
}

impl CatalogApi for FakeCatalog {
    fn login<'a>(&'a self, identifier: &'a str, password: &'a str) -> CatalogFuture<'a, Session> {
        Box::pin(async move {
            if identifier == "vaidya" && password == "secret" {
                Ok(test_session())
            } else {
                Err(AdminError::LoginRejected(
                    "Invalid identifier or password".into(),
                ))
            }
        })
    }

    fn fetch_audit_logs<'a>(&'a self, token: &'a str) -> CatalogFuture<'a, Vec<AuditLogEntry>> {
        Box::pin(async move {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.check(token)?;
            Ok(self.logs.lock().unwrap().clone())
        })
    }

    fn list_products<'a>(&'a self, token: &'a str) -> CatalogFuture<'a, Vec<Product>> {
        Box::pin(async move {
            self.check(token)?;
            Ok(self.products.lock().unwrap().clone())
        })
    }

    fn create_product<'a>(
        &'a self,
        token: &'a str,
        draft: &'a ProductDraft,
    ) -> CatalogFuture<'a, Product> {
        Box::pin(async move {
            self.check(token)?;
            let mut products = self.products.lock().unwrap();
            let created = Product {
                id: products.len() as i64 + 1,
                category: Some(draft.category),
                ..product(&format!("doc{}", products.len() + 1), &draft.name)
            };
            products.push(created.clone());
            Ok(created)
        })
    }

    fn update_product<'a>(
        &'a self,
        token: &'a str,
        id: &'a DocumentId,
        draft: &'a ProductDraft,
    ) -> CatalogFuture<'a, Product> {
        Box::pin(async move {
            self.check(token)?;
            let mut products = self.products.lock().unwrap();
            let existing = products
                .iter_mut()
                .find(|p| &p.document_id == id)
                .ok_or(AdminError::Upstream {
                    status: 404,
                    message: "Not Found".into(),
                })?;
            existing.name = draft.name.clone();
            existing.category = Some(draft.category);
            Ok(existing.clone())
        })
    }

    fn delete_product<'a>(&'a self, token: &'a str, id: &'a DocumentId) -> CatalogFuture<'a, ()> {
        Box::pin(async move {
            self.check(token)?;
            self.deleted.lock().unwrap().push(id.to_string());
            self.products
                .lock()
                .unwrap()
                .retain(|p| &p.document_id != id);
            Ok(())
        })
    }
}
