use crate::domain::error::AdminError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Newtype so the domain error can implement axum's `IntoResponse`.
pub struct ApiError(pub AdminError);

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            AdminError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            AdminError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "not_authenticated",
                "Please login to access this page".to_string(),
            ),
            AdminError::AuthExpired => (
                StatusCode::UNAUTHORIZED,
                "session_expired",
                "Session expired, please login again".to_string(),
            ),
            AdminError::LoginRejected(msg) => {
                (StatusCode::UNAUTHORIZED, "login_failed", msg.clone())
            }
            AdminError::Upstream { status, message } => {
                tracing::warn!(upstream_status = status, "upstream error: {message}");
                (StatusCode::BAD_GATEWAY, "upstream_error", message.clone())
            }
            AdminError::Network(err) => {
                tracing::error!("network error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "network_error",
                    "content API unreachable".to_string(),
                )
            }
            AdminError::Serialization(err) => {
                tracing::error!("serialization error: {err}");
                internal()
            }
            AdminError::Csv(err) => {
                tracing::error!("csv error: {err}");
                internal()
            }
            AdminError::Io(err) => {
                tracing::error!("io error: {err}");
                internal()
            }
            AdminError::Config(msg) => {
                tracing::error!("config error: {msg}");
                internal()
            }
        };

        let mut body = serde_json::json!({
            "error_code": error_code,
            "message": message,
        });
        if status == StatusCode::UNAUTHORIZED && error_code != "login_failed" {
            body["redirect"] = serde_json::json!("/login");
        }

        (status, Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "internal error".to_string(),
    )
}
