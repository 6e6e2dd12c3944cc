use serde_json::{Map, Value};

/// One structured key-value pair attached to a log record.
///
/// Keys are arbitrary runtime strings and values anything that converts
/// into a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub struct LogField {
    key: String,
    value: Value,
}

impl LogField {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl<K, V> From<(K, V)> for LogField
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        LogField::new(key, value)
    }
}

/// Encodes a field slice as one compact JSON object, `None` when empty.
///
/// Keys come out sorted, so a given field set always encodes to the same
/// string. When a key repeats, the last value wins.
pub(crate) fn encode_fields(fields: &[LogField]) -> Option<String> {
    if fields.is_empty() {
        return None;
    }
    let mut map = Map::new();
    for field in fields {
        map.insert(field.key.clone(), field.value.clone());
    }
    Some(Value::Object(map).to_string())
}
