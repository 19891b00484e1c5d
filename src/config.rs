use {
    crate::domain::error::AdminError,
    std::{env, net::SocketAddr, path::PathBuf, time::Duration},
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_FILE: &str = ".ayur_admin/session.json";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_domain: String,
    pub listen_addr: SocketAddr,
    pub session_file: PathBuf,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, AdminError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AdminError> {
        let api_domain = lookup("API_DOMAIN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AdminError::Config("API_DOMAIN must be set".into()))?;
        if !(api_domain.starts_with("http://") || api_domain.starts_with("https://")) {
            return Err(AdminError::Config(format!(
                "API_DOMAIN must be an http(s) URL, got: {api_domain}"
            )));
        }

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AdminError::Config(format!("invalid LISTEN_ADDR: {e}")))?;

        let session_file = lookup("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| AdminError::Config(format!("invalid UPSTREAM_TIMEOUT_SECS: {e}")))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            api_domain: api_domain.trim_end_matches('/').to_string(),
            listen_addr,
            session_file,
            upstream_timeout: Duration::from_secs(upstream_timeout),
        })
    }
}
