use {
    crate::domain::{
        error::AdminError,
        session::{Session, SessionStore, SessionUser},
    },
    serde::{Deserialize, Serialize},
    std::{
        fs,
        io::ErrorKind,
        path::{Path, PathBuf},
        sync::Mutex,
    },
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<SessionUser>,
}

/// Session persisted as a small JSON file, shared by every request.
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StoredSession {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return StoredSession::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable session file");
                return StoredSession::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "corrupt session file, ignoring");
            StoredSession::default()
        })
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.read().token.filter(|t| !t.is_empty())
    }

    fn user(&self) -> Option<SessionUser> {
        self.read().user
    }

    fn save(&self, session: &Session) -> Result<(), AdminError> {
        let stored = StoredSession {
            token: Some(session.token.clone()),
            user: Some(session.user.clone()),
        };
        let raw = serde_json::to_string_pretty(&stored)?;

        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), AdminError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local session, used by tests and ephemeral runs.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }

    fn current(&self) -> Option<Session> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.current().map(|s| s.token)
    }

    fn user(&self) -> Option<SessionUser> {
        self.current().map(|s| s.user)
    }

    fn save(&self, session: &Session) -> Result<(), AdminError> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AdminError> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
