use {
    super::auth::{bearer_token, clear_on_expiry},
    crate::domain::{
        audit::AuditLogEntry,
        catalog::CatalogApi,
        csv_export::{export_file_name, to_csv},
        dedup::{deduplicate, filter_no_ops},
        error::AdminError,
        session::{SessionStore, SessionUser},
    },
    chrono::NaiveDate,
    serde::Serialize,
    std::sync::atomic::{AtomicU64, Ordering},
    tokio::sync::RwLock,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Loaded,
    Empty,
}

/// Deduplicated audit log as shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditLogView {
    pub user: Option<SessionUser>,
    pub status: ViewStatus,
    pub duplicates_removed: usize,
    pub entries: Vec<AuditLogEntry>,
}

impl AuditLogView {
    pub fn from_batch(user: Option<SessionUser>, batch: Vec<AuditLogEntry>) -> Self {
        let fetched = batch.len();
        let deduped = deduplicate(filter_no_ops(batch));
        tracing::debug!(
            fetched,
            kept = deduped.entries.len(),
            duplicates_removed = deduped.duplicates_removed,
            "audit batch deduplicated"
        );
        let status = if deduped.entries.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Loaded
        };
        Self {
            user,
            status,
            duplicates_removed: deduped.duplicates_removed,
            entries: deduped.entries,
        }
    }
}

/// Downloadable CSV of the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: String,
    pub body: String,
}

/// Fetch a fresh batch and build the deduplicated view.
pub async fn load_audit_logs(
    api: &dyn CatalogApi,
    session: &dyn SessionStore,
) -> Result<AuditLogView, AdminError> {
    let token = bearer_token(session)?;
    let batch = clear_on_expiry(session, api.fetch_audit_logs(&token).await)?;
    Ok(AuditLogView::from_batch(session.user(), batch))
}

/// Holds the most recently *started* successful fetch's view. A fetch that
/// finishes after a newer one has been published is discarded.
#[derive(Default)]
pub struct AuditLogFeed {
    tickets: AtomicU64,
    published: RwLock<Option<(u64, AuditLogView)>>,
}

impl AuditLogFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.tickets.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish `view` under `ticket` unless a newer ticket already published.
    /// Returns the view that is current afterwards.
    pub async fn publish(&self, ticket: u64, view: AuditLogView) -> AuditLogView {
        let mut published = self.published.write().await;
        if let Some((current, newer)) = published.as_ref() {
            if *current > ticket {
                tracing::debug!(ticket, current, "discarding stale audit fetch");
                return newer.clone();
            }
        }
        *published = Some((ticket, view.clone()));
        view
    }

    pub async fn current(&self) -> Option<AuditLogView> {
        self.published.read().await.as_ref().map(|(_, v)| v.clone())
    }

    pub async fn clear(&self) {
        *self.published.write().await = None;
    }

    /// Load a fresh batch; last-started fetch wins.
    pub async fn refresh(
        &self,
        api: &dyn CatalogApi,
        session: &dyn SessionStore,
    ) -> Result<AuditLogView, AdminError> {
        let ticket = self.begin();
        match load_audit_logs(api, session).await {
            Ok(view) => Ok(self.publish(ticket, view).await),
            Err(AdminError::AuthExpired) => {
                self.clear().await;
                Err(AdminError::AuthExpired)
            }
            Err(e) => Err(e),
        }
    }
}

/// CSV of the published view, fetching once when nothing is published yet.
pub async fn export_csv(
    feed: &AuditLogFeed,
    api: &dyn CatalogApi,
    session: &dyn SessionStore,
    today: NaiveDate,
) -> Result<CsvExport, AdminError> {
    bearer_token(session)?;
    let view = match feed.current().await {
        Some(view) => view,
        None => feed.refresh(api, session).await?,
    };
    let body = to_csv(&view.entries)?;
    tracing::info!(rows = view.entries.len(), "audit log exported");
    Ok(CsvExport {
        file_name: export_file_name(today),
        body,
    })
}
