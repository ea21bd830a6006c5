use crate::context::Lookup;
pub use serde_json::Value as JsonValue;


impl Lookup for JsonValue {
    fn child(&self, name: &str) -> Option<&Self> {
        match self {
            JsonValue::Object(map) => map.get(name),
            JsonValue::Array(seq) => name.parse::<usize>().ok().and_then(|i| seq.get(i)),
            _ => None
        }
    }

    fn value(&self) -> Option<String> {
        match self {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Bool(b) => Some(b.to_string()),
            JsonValue::Null => Some(String::new()),
            _ => None
        }
    }

    fn is_truthy(&self) -> bool {
        match self {
            JsonValue::Null => false,
            JsonValue::Bool(b) => *b,
            JsonValue::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            JsonValue::String(s) => !s.is_empty(),
            JsonValue::Array(seq) => !seq.is_empty(),
            JsonValue::Object(map) => !map.is_empty()
        }
    }
}
