use {
    crate::domain::{
        audit::AuditLogEntry,
        catalog::{CatalogApi, CatalogFuture},
        error::AdminError,
        id::DocumentId,
        product::{Product, ProductDraft},
        session::{Session, SessionUser},
    },
    reqwest::{RequestBuilder, Response, StatusCode},
    serde::Deserialize,
    std::time::Duration,
};

const PRODUCT_POPULATE: [(&str, &str); 2] = [
    ("populate[proprietary_fields][populate]", "price_list"),
    ("populate[classical_fields][populate]", "price_list"),
];

/// HTTP client for the Strapi-style content API.
pub struct StrapiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    jwt: String,
    user: SessionUser,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

impl StrapiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AdminError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AdminError> {
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AdminError::AuthExpired);
        }
        if !status.is_success() {
            let message = upstream_message(response)
                .await
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(AdminError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn login_inner(&self, identifier: &str, password: &str) -> Result<Session, AdminError> {
        let response = self
            .http
            .post(self.url("/api/auth/local"))
            .json(&serde_json::json!({ "identifier": identifier, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            let message = upstream_message(response)
                .await
                .unwrap_or_else(|| "Login failed".to_string());
            return Err(AdminError::LoginRejected(message));
        }

        let body: LoginResponse = response.json().await?;
        tracing::info!(user_id = body.user.id, "login accepted");
        Ok(Session {
            token: body.jwt,
            user: body.user,
        })
    }

    async fn fetch_audit_logs_inner(&self, token: &str) -> Result<Vec<AuditLogEntry>, AdminError> {
        let response = self
            .send(self.http.get(self.url("/api/audit-logs")).bearer_auth(token))
            .await?;
        let body: serde_json::Value = response.json().await?;
        Ok(parse_audit_batch(body))
    }

    async fn list_products_inner(&self, token: &str) -> Result<Vec<Product>, AdminError> {
        let response = self
            .send(
                self.http
                    .get(self.url("/api/products"))
                    .query(&PRODUCT_POPULATE)
                    .bearer_auth(token),
            )
            .await?;
        let body: DataEnvelope<Vec<Product>> = response.json().await?;
        Ok(body.data)
    }

    async fn create_product_inner(
        &self,
        token: &str,
        draft: &ProductDraft,
    ) -> Result<Product, AdminError> {
        let response = self
            .send(
                self.http
                    .post(self.url("/api/products"))
                    .bearer_auth(token)
                    .json(&draft.to_payload()),
            )
            .await?;
        let body: DataEnvelope<Product> = response.json().await?;
        Ok(body.data)
    }

    async fn update_product_inner(
        &self,
        token: &str,
        id: &DocumentId,
        draft: &ProductDraft,
    ) -> Result<Product, AdminError> {
        let response = self
            .send(
                self.http
                    .put(self.url(&format!("/api/products/{id}")))
                    .bearer_auth(token)
                    .json(&draft.to_payload()),
            )
            .await?;
        let body: DataEnvelope<Product> = response.json().await?;
        Ok(body.data)
    }

    async fn delete_product_inner(&self, token: &str, id: &DocumentId) -> Result<(), AdminError> {
        self.send(
            self.http
                .delete(self.url(&format!("/api/products/{id}")))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }
}

impl CatalogApi for StrapiClient {
    fn login<'a>(&'a self, identifier: &'a str, password: &'a str) -> CatalogFuture<'a, Session> {
        Box::pin(self.login_inner(identifier, password))
    }

    fn fetch_audit_logs<'a>(&'a self, token: &'a str) -> CatalogFuture<'a, Vec<AuditLogEntry>> {
        Box::pin(self.fetch_audit_logs_inner(token))
    }

    fn list_products<'a>(&'a self, token: &'a str) -> CatalogFuture<'a, Vec<Product>> {
        Box::pin(self.list_products_inner(token))
    }

    fn create_product<'a>(
        &'a self,
        token: &'a str,
        draft: &'a ProductDraft,
    ) -> CatalogFuture<'a, Product> {
        Box::pin(self.create_product_inner(token, draft))
    }

    fn update_product<'a>(
        &'a self,
        token: &'a str,
        id: &'a DocumentId,
        draft: &'a ProductDraft,
    ) -> CatalogFuture<'a, Product> {
        Box::pin(self.update_product_inner(token, id, draft))
    }

    fn delete_product<'a>(&'a self, token: &'a str, id: &'a DocumentId) -> CatalogFuture<'a, ()> {
        Box::pin(self.delete_product_inner(token, id))
    }
}

// ── Wire helpers ────────────────────────────────────────────────────────────

/// Accepts `{ "data": [...] }` or a bare array; anything else is an empty
/// batch. Records that are not JSON objects are skipped.
pub fn parse_audit_batch(body: serde_json::Value) -> Vec<AuditLogEntry> {
    let records = match body {
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(serde_json::Value::Array(items)) => items,
            _ => Vec::new(),
        },
        serde_json::Value::Array(items) => items,
        _ => Vec::new(),
    };

    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<AuditLogEntry>(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed audit record");
                None
            }
        })
        .collect()
}

/// Strapi error bodies look like `{ "error": { "message": "..." } }`.
async fn upstream_message(response: Response) -> Option<String> {
    let body: serde_json::Value = response.json().await.ok()?;
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
