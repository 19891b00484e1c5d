use {
    super::audit::AuditLogEntry,
    serde::Serialize,
    std::{
        cmp::Reverse,
        collections::{HashMap, hash_map::Entry},
    },
};

/// Result of collapsing a batch of audit entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Deduplicated {
    pub entries: Vec<AuditLogEntry>,
    pub duplicates_removed: usize,
}

/// Identity of a logical audit event. Two entries with equal keys describe
/// the same change and only the most recent one is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    action: String,
    entity_document_id: String,
    changes: String,
    previous_values: String,
}

impl DedupKey {
    pub fn of(entry: &AuditLogEntry) -> Self {
        Self {
            action: entry.action.clone(),
            entity_document_id: entry.entity_document_id.clone().unwrap_or_default(),
            changes: canonical_payload(entry.changes.as_ref()),
            previous_values: canonical_payload(entry.previous_values.as_ref()),
        }
    }
}

/// Drop entries whose `changes` records no mutation. Order is preserved.
pub fn filter_no_ops(entries: Vec<AuditLogEntry>) -> Vec<AuditLogEntry> {
    entries.into_iter().filter(|e| !e.is_no_op()).collect()
}

/// Collapse entries sharing a [`DedupKey`], keeping the latest timestamp per
/// key (the later-encountered entry on ties), then order newest first.
///
/// Unparseable timestamps rank below every valid one.
pub fn deduplicate(entries: Vec<AuditLogEntry>) -> Deduplicated {
    let total = entries.len();
    let mut slots: Vec<AuditLogEntry> = Vec::with_capacity(total);
    let mut index: HashMap<DedupKey, usize> = HashMap::with_capacity(total);

    for entry in entries {
        match index.entry(DedupKey::of(&entry)) {
            Entry::Vacant(v) => {
                v.insert(slots.len());
                slots.push(entry);
            }
            Entry::Occupied(o) => {
                let kept = &mut slots[*o.get()];
                if entry.occurred_at() >= kept.occurred_at() {
                    *kept = entry;
                }
            }
        }
    }

    // Stable: equal timestamps keep first-seen key order.
    slots.sort_by_cached_key(|e| Reverse(e.occurred_at()));

    Deduplicated {
        duplicates_removed: total - slots.len(),
        entries: slots,
    }
}

/// Key-order independent JSON text: object keys are sorted at every depth.
pub fn canonical_json(value: &serde_json::Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn canonical_payload(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(v) => canonical_json(v),
        None => "null".to_string(),
    }
}

fn write_canonical(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key.as_str()], out);
            }
            out.push('}');
        }
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
