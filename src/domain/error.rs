use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("session expired")]
    AuthExpired,

    #[error("login rejected: {0}")]
    LoginRejected(String),

    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),
}
