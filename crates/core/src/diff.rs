//! Field-level diff primitives for the audit trail.
//!
//! A diff maps field names to `{old, new}` pairs for fields whose stored
//! value actually changed. The caller owns the explicit field list (which
//! fields to compare, and only when present in the update payload); this
//! module owns the comparison and the history-entry shapes.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// A diff payload: field name to `{"old": ..., "new": ...}`.
pub type Diff = Map<String, Value>;

/// Compare the stored representations of `old` and `new` and record a
/// `{old, new}` entry under `field` if they differ. Equal values record
/// nothing, so an untouched field never appears in the diff.
pub fn record_change<T: Serialize>(diff: &mut Diff, field: &str, old: &T, new: &T) {
    let old_value = serde_json::to_value(old).unwrap_or(Value::Null);
    let new_value = serde_json::to_value(new).unwrap_or(Value::Null);
    if old_value != new_value {
        diff.insert(
            field.to_string(),
            json!({ "old": old_value, "new": new_value }),
        );
    }
}

/// History payload for a create: the full new record.
pub fn created_entry<T: Serialize>(record: &T) -> Value {
    json!({ "created": record })
}

/// History payload for a delete: the full pre-delete snapshot.
pub fn deleted_entry<T: Serialize>(record: &T) -> Value {
    json!({ "deleted": record })
}
