// example.rs

use crate::registry::ReturnField;
use serde_json::{json, Map, Value};

/// Placeholder value for a declared field type.
pub fn example_value(ty: &str) -> Value {
    let lower = ty.trim().to_lowercase();

    // Array<T>, List<T>, T[] all produce a one-element array of T
    if let Some(inner) = element_type(&lower) {
        return Value::Array(vec![example_value(inner)]);
    }

    match lower.as_str() {
        "string" | "str" | "char" => json!("example"),
        "int" | "integer" | "long" | "short" | "i32" | "i64" | "u32" | "u64" => json!(42),
        "number" | "double" | "float" | "decimal" | "f64" | "f32" => json!(12.5),
        "boolean" | "bool" => json!(true),
        "date" | "datetime" | "timestamp" => json!("2024-01-01 00:00:00"),
        "array" | "list" => json!([]),
        "object" | "map" => json!({}),
        _ => Value::Null,
    }
}

fn element_type(ty: &str) -> Option<&str> {
    for prefix in ["array<", "list<", "vec<"] {
        if let Some(rest) = ty.strip_prefix(prefix) {
            return rest.strip_suffix('>');
        }
    }
    ty.strip_suffix("[]")
}

fn is_collection(ty: &str) -> bool {
    let lower = ty.trim().to_lowercase();
    matches!(lower.as_str(), "array" | "list") || element_type(&lower).is_some()
}

/// Example JSON for one field, honouring explicit examples first.
pub fn field_example(field: &ReturnField) -> Value {
    if let Some(example) = &field.example {
        return example.clone();
    }
    if field.children.is_empty() {
        return example_value(&field.data_type);
    }
    let object = fields_example(&field.children);
    if is_collection(&field.data_type) {
        Value::Array(vec![object])
    } else {
        object
    }
}

/// Example JSON object assembled from a list of fields.
pub fn fields_example(fields: &[ReturnField]) -> Value {
    let mut map = Map::new();
    for field in fields {
        map.insert(field.name.clone(), field_example(field));
    }
    Value::Object(map)
}
