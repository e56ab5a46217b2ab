//! Conversion from JSON documents
//!
//! Arrays become `List<object>` and objects become
//! `Dictionary<string, object>`, so two documents compare structurally with
//! key order ignored.

use super::{Builtin, TypeName, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::U64(u)
                } else {
                    Value::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::list(
                TypeName::object(),
                items.into_iter().map(Value::from).collect(),
            ),
            serde_json::Value::Object(fields) => Value::map(
                Builtin::String.into(),
                TypeName::object(),
                fields
                    .into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from(json.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert!(Value::from(json!(null)).is_null());
        assert!(matches!(Value::from(json!(true)), Value::Bool(true)));
        assert!(matches!(Value::from(json!(-3)), Value::I64(-3)));
        assert!(matches!(Value::from(json!(u64::MAX)), Value::U64(u64::MAX)));
        assert!(matches!(Value::from(json!(1.5)), Value::F64(f) if f == 1.5));
    }

    #[test]
    fn test_object_becomes_dictionary() {
        let value = Value::from(json!({"a": 1, "b": [true]}));
        match value {
            Value::Map(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.type_name().type_args().len(), 2);
            }
            other => panic!("expected a map, got {other:?}"),
        }
    }
}
