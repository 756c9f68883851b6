use crate::domain::model::LedgerEntry;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DEFAULT_SOURCE: &str = "data/leads.csv";

#[derive(Serialize)]
struct LedgerDocument<'a> {
    generated: &'a [LedgerEntry],
}

/// The skip predicate for loading: an entry survives iff it is a JSON
/// object whose `slug` is a string.
pub fn is_valid_entry(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|entry| entry.get("slug"))
        .map_or(false, |slug| slug.is_string())
}

/// Parses ledger content, accepting both `{"generated": [...]}` and the
/// legacy bare-array form. Malformed entries are skipped silently; any
/// other well-formed document shape is treated as an empty ledger.
pub fn parse_ledger(data: &[u8]) -> Result<Vec<LedgerEntry>> {
    let document: Value = serde_json::from_slice(data)?;

    let raw_entries = match document {
        Value::Object(ref map) => map
            .get("generated")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        Value::Array(items) => items,
        _ => Vec::new(),
    };

    let mut entries = Vec::new();
    for item in &raw_entries {
        if !is_valid_entry(item) {
            tracing::debug!("Skipping malformed ledger entry: {}", item);
            continue;
        }
        entries.push(entry_from_value(item));
    }
    Ok(entries)
}

fn entry_from_value(item: &Value) -> LedgerEntry {
    let text = |key: &str, default: &str| {
        item.get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    };

    LedgerEntry {
        slug: text("slug", ""),
        created_at: text("created_at", ""),
        source: text("source", DEFAULT_SOURCE),
    }
}

/// Serializes the full entry set as `{"generated": [...]}`, pretty-printed
/// with a 2-space indent and a trailing newline. Callers supply the complete
/// desired set; nothing is appended or deduplicated here.
pub fn serialize_ledger(entries: &[LedgerEntry]) -> Result<Vec<u8>> {
    let document = LedgerDocument { generated: entries };
    let mut data = serde_json::to_vec_pretty(&document)?;
    data.push(b'\n');
    Ok(data)
}
