use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{error::AdminError, id::DocumentId, product::ProductDraft},
        services::{audit_logs, auth, products},
    },
    axum::{
        Json, Router,
        extract::{DefaultBodyLimit, Path, State},
        http::{StatusCode, header},
        response::IntoResponse,
        routing::{get, post, put},
    },
    serde::Deserialize,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ayur_admin ok" }))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/session", get(session_handler))
        .route("/audit-logs", get(audit_logs_handler))
        .route("/audit-logs/export", get(export_handler))
        .route("/products", get(list_products_handler).post(create_product_handler))
        .route(
            "/products/{document_id}",
            put(update_product_handler).delete(delete_product_handler),
        )
        .layer(DefaultBodyLimit::max(256 * 1024))
        .with_state(state)
}

#[tracing::instrument(name = "login", skip_all)]
async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = auth::login(&*state.api, &*state.session, &req.identifier, &req.password).await?;
    state.feed.clear().await;
    Ok(Json(serde_json::json!({
        "status": "logged_in",
        "display_name": user.display_name(),
        "user": user,
    })))
}

#[tracing::instrument(name = "logout", skip_all)]
async fn logout_handler(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    auth::logout(&*state.session)?;
    state.feed.clear().await;
    Ok(Json(serde_json::json!({"status": "logged_out"})))
}

async fn session_handler(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.session.is_authenticated() {
        return Err(AdminError::NotAuthenticated.into());
    }
    let user = state.session.user().ok_or(AdminError::NotAuthenticated)?;
    Ok(Json(serde_json::json!({
        "display_name": user.display_name(),
        "user": user,
    })))
}

#[tracing::instrument(name = "audit_logs", skip_all)]
async fn audit_logs_handler(
    State(state): State<AppState>,
) -> Result<Json<audit_logs::AuditLogView>, ApiError> {
    let view = state.feed.refresh(&*state.api, &*state.session).await?;
    tracing::info!(
        entries = view.entries.len(),
        duplicates_removed = view.duplicates_removed,
        "audit logs served"
    );
    Ok(Json(view))
}

#[tracing::instrument(name = "audit_logs_export", skip_all)]
async fn export_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let today = chrono::Utc::now().date_naive();
    let export = audit_logs::export_csv(&state.feed, &*state.api, &*state.session, today).await?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.file_name),
        ),
    ];
    Ok((headers, export.body))
}

#[tracing::instrument(name = "products_list", skip_all)]
async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let items = products::list_products(&*state.api, &*state.session).await?;
    Ok(Json(serde_json::json!({ "data": items })))
}

#[tracing::instrument(name = "products_create", skip_all)]
async fn create_product_handler(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let created = products::create_product(&*state.api, &*state.session, &draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": created })),
    ))
}

#[tracing::instrument(name = "products_update", skip_all)]
async fn update_product_handler(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = DocumentId::new(document_id)?;
    let updated = products::update_product(&*state.api, &*state.session, &id, &draft).await?;
    Ok(Json(serde_json::json!({ "data": updated })))
}

#[tracing::instrument(name = "products_delete", skip_all)]
async fn delete_product_handler(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = DocumentId::new(document_id)?;
    products::delete_product(&*state.api, &*state.session, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
