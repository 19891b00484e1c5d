use crate::domain::{
    catalog::CatalogApi,
    error::AdminError,
    session::{SessionStore, SessionUser},
};

/// Exchange credentials for a token and persist the session.
pub async fn login(
    api: &dyn CatalogApi,
    session: &dyn SessionStore,
    identifier: &str,
    password: &str,
) -> Result<SessionUser, AdminError> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err(AdminError::Validation(
            "Please enter both email/username and password".into(),
        ));
    }

    let issued = api.login(identifier, password).await?;
    session.save(&issued)?;
    tracing::info!(user = %issued.user.display_name(), "logged in");
    Ok(issued.user)
}

pub fn logout(session: &dyn SessionStore) -> Result<(), AdminError> {
    session.clear()?;
    tracing::info!("logged out");
    Ok(())
}

/// Token for upstream calls; requires both token and user to be present.
pub fn bearer_token(session: &dyn SessionStore) -> Result<String, AdminError> {
    if !session.is_authenticated() {
        return Err(AdminError::NotAuthenticated);
    }
    session.token().ok_or(AdminError::NotAuthenticated)
}

/// An expired token is never retried: drop the session so the caller is
/// sent back to login.
pub fn clear_on_expiry<T>(
    session: &dyn SessionStore,
    result: Result<T, AdminError>,
) -> Result<T, AdminError> {
    if let Err(AdminError::AuthExpired) = &result {
        tracing::warn!("upstream rejected token, clearing session");
        if let Err(e) = session.clear() {
            tracing::error!(error = %e, "failed to clear expired session");
        }
    }
    result
}
