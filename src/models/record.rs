//! A single remote collection row.
//!
//! Backend rows are schemaless JSON objects whose field sets differ per
//! collection (leads, projects, users). [`Record`] wraps one row and adds
//! the accessors the tables and the state machine need: a stable
//! identifier and display text with per-column fallbacks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Field names probed, in order, for a row's stable identifier.
const ID_FIELDS: [&str; 2] = ["_id", "id"];

/// One remote record as an ordered field-to-value mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap a JSON object. Returns `None` for non-object values.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Build a record from field/value pairs. Test and fixture helper.
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// The record's stable identifier, if present.
    ///
    /// Probes `_id` then `id`; numeric identifiers are rendered as text so
    /// a single correlation key type works across backends.
    pub fn id(&self) -> Option<String> {
        for field in ID_FIELDS {
            match self.0.get(field) {
                Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
                Some(Value::Number(n)) => return Some(n.to_string()),
                _ => {}
            }
        }
        None
    }

    /// Assign a synthetic identifier when the row carries none.
    ///
    /// Positional indexes are never used as identity; a row without an id
    /// gets a uuid at ingestion so update/delete can still target it
    /// locally even as neighbors are inserted or removed.
    pub fn assign_id_if_missing(&mut self) {
        if self.id().is_none() {
            self.0.insert(
                "_id".to_string(),
                Value::String(Uuid::new_v4().to_string()),
            );
        }
    }

    /// Get a field as a string slice, if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Raw field access.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Display text for a field, with a fallback for absent or null values.
    ///
    /// Strings render verbatim, numbers and booleans via their canonical
    /// text form; everything else falls back.
    pub fn display(&self, field: &str, fallback: &str) -> String {
        match self.0.get(field) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Merge patch fields into this record, overwriting on collision.
    ///
    /// This is a field merge, not a replacement: fields absent from the
    /// patch keep their current values.
    pub fn merge(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).expect("object")
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("row")).is_none());
        assert!(Record::from_value(json!(null)).is_none());
    }

    #[test]
    fn test_id_prefers_underscore_id() {
        let r = record(json!({"_id": "abc", "id": "other"}));
        assert_eq!(r.id().as_deref(), Some("abc"));
    }

    #[test]
    fn test_id_falls_back_to_plain_id() {
        let r = record(json!({"id": "xyz"}));
        assert_eq!(r.id().as_deref(), Some("xyz"));
    }

    #[test]
    fn test_numeric_id_rendered_as_text() {
        let r = record(json!({"_id": 42}));
        assert_eq!(r.id().as_deref(), Some("42"));
    }

    #[test]
    fn test_empty_string_id_treated_as_missing() {
        let r = record(json!({"_id": ""}));
        assert_eq!(r.id(), None);
    }

    #[test]
    fn test_assign_id_if_missing() {
        let mut r = record(json!({"name": "Acme"}));
        assert_eq!(r.id(), None);
        r.assign_id_if_missing();
        let id = r.id().expect("synthetic id assigned");
        assert!(!id.is_empty());

        // A second call does not replace the assigned id.
        r.assign_id_if_missing();
        assert_eq!(r.id().as_deref(), Some(id.as_str()));
    }

    #[test]
    fn test_assign_id_preserves_existing() {
        let mut r = record(json!({"_id": "keep-me"}));
        r.assign_id_if_missing();
        assert_eq!(r.id().as_deref(), Some("keep-me"));
    }

    #[test]
    fn test_synthetic_ids_are_distinct() {
        let mut a = record(json!({}));
        let mut b = record(json!({}));
        a.assign_id_if_missing();
        b.assign_id_if_missing();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_display_fallbacks() {
        let r = record(json!({
            "storeName": "Corner Cafe",
            "stars": 4.5,
            "open": true,
            "phone": "",
            "city": null
        }));
        assert_eq!(r.display("storeName", "Unnamed Business"), "Corner Cafe");
        assert_eq!(r.display("stars", "N/A"), "4.5");
        assert_eq!(r.display("open", "-"), "true");
        assert_eq!(r.display("phone", "No phone"), "No phone");
        assert_eq!(r.display("city", "N/A"), "N/A");
        assert_eq!(r.display("missing", "N/A"), "N/A");
    }

    #[test]
    fn test_merge_overwrites_and_preserves() {
        let mut r = record(json!({"name": "Old", "email": "old@x.com", "role": "user"}));
        let patch = json!({"name": "New", "role": "admin"});
        let Value::Object(patch) = patch else { unreachable!() };

        r.merge(&patch);

        assert_eq!(r.get_str("name"), Some("New"));
        assert_eq!(r.get_str("role"), Some("admin"));
        // Untouched field preserved: merge, not replace.
        assert_eq!(r.get_str("email"), Some("old@x.com"));
    }

    #[test]
    fn test_serde_transparent_roundtrip() {
        let r = record(json!({"_id": "1", "name": "Ada"}));
        let text = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(back, r);
    }
}
