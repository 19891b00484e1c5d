pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {
    domain::{catalog::CatalogApi, session::SessionStore},
    services::audit_logs::AuditLogFeed,
    std::sync::Arc,
};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn CatalogApi>,
    pub session: Arc<dyn SessionStore>,
    pub feed: Arc<AuditLogFeed>,
}

impl AppState {
    pub fn new(api: Arc<dyn CatalogApi>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            api,
            session,
            feed: Arc::new(AuditLogFeed::new()),
        }
    }
}
