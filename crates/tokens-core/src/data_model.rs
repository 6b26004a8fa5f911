//! Data Model: Definition, Prop, Alias, Catalog
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered field map backing props and aliases.
pub type Fields = Map<String, Value>;

/// Final flat mapping of property keys to resolved properties.
pub type Catalog = IndexMap<String, Prop>;

static NULL: Value = Value::Null;

pub const VALUE_KEY: &str = "value";
pub const TYPE_KEY: &str = "type";
pub const CATEGORY_KEY: &str = "category";
pub const META_KEY: &str = "meta";
pub const NAME_KEY: &str = "name";

/// Keys every property must carry once global defaults are merged.
pub const REQUIRED_PROP_KEYS: [&str; 3] = [VALUE_KEY, TYPE_KEY, CATEGORY_KEY];

/// A named, typed, categorized value slot.
///
/// Props stay open maps: fields contributed by `global` (or anything else the
/// source document carries) survive resolution next to the well-known keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prop(Fields);

impl Prop {
    pub fn new(fields: Fields) -> Self {
        Self(fields)
    }

    /// The prop's value, `Null` when absent.
    pub fn value(&self) -> &Value {
        self.0.get(VALUE_KEY).unwrap_or(&NULL)
    }

    /// The `type` field.
    pub fn kind(&self) -> Option<&str> {
        self.0.get(TYPE_KEY).and_then(Value::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.0.get(CATEGORY_KEY).and_then(Value::as_str)
    }

    pub fn meta(&self) -> Option<&Value> {
        self.0.get(META_KEY)
    }

    /// Number stored under `meta.<key>`, if any.
    pub fn meta_number(&self, key: &str) -> Option<f64> {
        self.meta()
            .and_then(|meta| meta.get(key))
            .and_then(Value::as_f64)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME_KEY).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn fields(&self) -> &Fields {
        &self.0
    }

    pub fn into_fields(self) -> Fields {
        self.0
    }

    /// Returns the prop with `value` replaced.
    pub fn with_value(self, value: Value) -> Self {
        self.with_field(VALUE_KEY, value)
    }

    /// Returns the prop with `key` set, keeping the field's position if it already exists.
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    /// Returns the prop without `key`.
    pub fn without_field(mut self, key: &str) -> Self {
        self.0.shift_remove(key);
        self
    }
}

impl From<Fields> for Prop {
    fn from(fields: Fields) -> Self {
        Self(fields)
    }
}

/// A named value usable as a substitution target inside prop and alias values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alias(Fields);

impl Alias {
    pub fn new(fields: Fields) -> Self {
        Self(fields)
    }

    pub fn value(&self) -> &Value {
        self.0.get(VALUE_KEY).unwrap_or(&NULL)
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.0.insert(VALUE_KEY.to_string(), value);
        self
    }

    pub fn fields(&self) -> &Fields {
        &self.0
    }
}

impl From<Fields> for Alias {
    fn from(fields: Fields) -> Self {
        Self(fields)
    }
}

/// One token source (file or fragment) before and during resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub props: IndexMap<String, Prop>,
    pub aliases: IndexMap<String, Alias>,
    /// Shared defaults; `None` once merged into the props.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<Fields>,
    /// Raw imported definitions; `None` once resolved and merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<Vec<Value>>,
}

impl Definition {
    /// Serialized form used for stage digests.
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageProof {
    pub id: String,
    pub in_hash: String,
    pub out_hash: String,
    pub latency_us: u64,
}

/// Per-stage digests of one top-level resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub trace_id: String,
    pub pipeline_id: String,
    pub resolved_at: DateTime<Utc>,
    pub stages: Vec<StageProof>,
}

/// Text of a value as substituted into another value.
///
/// Strings are used verbatim; anything else is rendered as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prop(value: Value) -> Prop {
        match value {
            Value::Object(fields) => Prop::new(fields),
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_prop_accessors() {
        let p = prop(json!({
            "value": "1rem",
            "type": "dimension",
            "category": "space",
            "meta": { "baseFontPixel": 10 }
        }));

        assert_eq!(p.value(), &json!("1rem"));
        assert_eq!(p.kind(), Some("dimension"));
        assert_eq!(p.category(), Some("space"));
        assert_eq!(p.meta_number("baseFontPixel"), Some(10.0));
        assert_eq!(p.meta_number("baseFontPercentage"), None);
        assert_eq!(p.name(), None);
    }

    #[test]
    fn test_with_value_keeps_field_order() {
        let p = prop(json!({ "value": "a", "type": "t", "category": "c" }))
            .with_value(json!("b"));

        let keys: Vec<&String> = p.fields().keys().collect();
        assert_eq!(keys, ["value", "type", "category"]);
        assert_eq!(p.value(), &json!("b"));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("10px")), "10px");
        assert_eq!(value_text(&json!(16)), "16");
        assert_eq!(value_text(&json!(true)), "true");
    }

    #[test]
    fn test_prop_serializes_as_plain_map() {
        let p = prop(json!({ "value": 1, "type": "number", "category": "size" }));
        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({ "value": 1, "type": "number", "category": "size" })
        );
    }
}
