use {
    super::{audit::AuditLogEntry, dedup::canonical_json, error::AdminError},
    chrono::NaiveDate,
    csv::{QuoteStyle, Terminator, WriterBuilder},
};

pub const CSV_HEADERS: [&str; 17] = [
    "ID",
    "Document ID",
    "Action",
    "Entity Type",
    "Entity ID",
    "Entity Document ID",
    "Username",
    "Email",
    "User ID",
    "User Document ID",
    "Changes",
    "Previous Values",
    "Timestamp",
    "Created At",
    "Updated At",
    "Published At",
    "Locale",
];

/// Serialize entries as CSV with every field quoted and embedded quotes doubled.
/// Absent values become empty fields.
pub fn to_csv(entries: &[AuditLogEntry]) -> Result<String, AdminError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for entry in entries {
        writer.write_record(csv_row(entry))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AdminError::Io(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes)
        .map_err(|e| AdminError::Validation(format!("csv output is not utf-8: {e}")))
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("audit-logs-{}.csv", date.format("%Y-%m-%d"))
}

fn csv_row(entry: &AuditLogEntry) -> [String; 17] {
    let actor = entry.actor.clone().unwrap_or_default();
    [
        entry.id.to_string(),
        entry.document_id.clone(),
        entry.action.clone(),
        entry.entity_type.clone(),
        entry.entity_id.clone().unwrap_or_default(),
        entry.entity_document_id.clone().unwrap_or_default(),
        actor.username.unwrap_or_default(),
        actor.email.unwrap_or_default(),
        opt_display(actor.id),
        actor.document_id.unwrap_or_default(),
        payload_field(entry.changes.as_ref()),
        payload_field(entry.previous_values.as_ref()),
        entry.timestamp.clone(),
        entry.created_at.clone().unwrap_or_default(),
        entry.updated_at.clone().unwrap_or_default(),
        entry.published_at.clone().unwrap_or_default(),
        entry.locale.clone().unwrap_or_default(),
    ]
}

fn opt_display(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn payload_field(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(v) => canonical_json(v),
    }
}
