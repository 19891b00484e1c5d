use {
    super::error::AdminError,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    #[serde(default, rename = "documentId")]
    pub document_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    /// Name shown in greetings: username, falling back to email.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}

/// Bearer token plus the identity it was issued for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Persisted `(token, user)` pair. Reads never fail: unreadable state is
/// reported as absent.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;

    fn user(&self) -> Option<SessionUser>;

    fn save(&self, session: &Session) -> Result<(), AdminError>;

    fn clear(&self) -> Result<(), AdminError>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }
}
