use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::AdminError;

/// Content-addressed resource identifier assigned by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Result<Self, AdminError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AdminError::Validation(
                "DocumentId cannot be empty".to_string(),
            ));
        }
        if id.contains('/') {
            return Err(AdminError::Validation(format!(
                "DocumentId cannot contain '/', got: {id}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
