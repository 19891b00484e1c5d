use {
    chrono::{DateTime, NaiveDate, NaiveDateTime, Utc},
    serde::{Deserialize, Deserializer, Serialize},
};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// The user who performed an audited action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditActor {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "documentId")]
    pub document_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One audit-log record as returned by `/api/audit-logs`.
///
/// Every field is defaulted so a record with missing optional data still
/// parses. Text fields also accept `null` or a mistyped scalar; `changes`
/// and `previous_values` stay opaque JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    #[serde(default)]
    pub id: i64,
    #[serde(default, rename = "documentId", deserialize_with = "lenient_string")]
    pub document_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub action: String,
    #[serde(default, alias = "entityType", deserialize_with = "lenient_string")]
    pub entity_type: String,
    #[serde(default, alias = "entityId", deserialize_with = "lenient_opt_string")]
    pub entity_id: Option<String>,
    #[serde(
        default,
        alias = "entityDocumentId",
        deserialize_with = "lenient_opt_string"
    )]
    pub entity_document_id: Option<String>,
    #[serde(default)]
    pub changes: Option<serde_json::Value>,
    #[serde(default, alias = "previousValues")]
    pub previous_values: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default, rename = "users_permissions_user", alias = "actor")]
    pub actor: Option<AuditActor>,
}

impl AuditLogEntry {
    /// Parsed `timestamp`, or `None` when it is not an ISO-8601 instant.
    ///
    /// Values without an offset are read as UTC; a bare date is midnight UTC.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .map(|naive| naive.and_utc())
    }

    /// No-op entries carry no field mutation and are hidden from every view.
    pub fn is_no_op(&self) -> bool {
        match &self.changes {
            Some(serde_json::Value::Object(map)) => map.is_empty(),
            Some(serde_json::Value::Array(items)) => items.is_empty(),
            _ => true,
        }
    }
}

fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(serde_json::Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(serde_json::Value::deserialize(deserializer)?))
}
