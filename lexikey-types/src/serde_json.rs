use std::collections::BTreeMap;
use std::{error, fmt};

use lexikey_traits::Value;

/// A conversion between the codec value universe and JSON failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// A JSON number with no finite `f64` image.
    UnrepresentableNumber,
    /// Sentinels only exist to bound ranges and have no JSON form.
    Sentinel,
    /// Extension values have no JSON form.
    Extension,
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JsonError::UnrepresentableNumber => {
                f.write_str("number cannot be represented in JSON")
            }
            JsonError::Sentinel => f.write_str("sentinels have no JSON form"),
            JsonError::Extension => f.write_str("extension values have no JSON form"),
        }
    }
}

impl error::Error for JsonError {}

/// Converts a JSON document into the codec value universe.
///
/// Numbers go through `f64`; integers beyond 2^53 lose precision the same
/// way they would in any double-based consumer.
pub fn value_from_json(json: serde_json::Value) -> Result<Value, JsonError> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => {
            let x = n.as_f64().ok_or(JsonError::UnrepresentableNumber)?;
            Ok(Value::Number(x))
        }
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(items) => {
            items.into_iter().map(value_from_json).collect::<Result<_, _>>().map(Value::Array)
        }
        serde_json::Value::Object(entries) => {
            let entries = entries
                .into_iter()
                .map(|(key, value)| Ok((key, value_from_json(value)?)))
                .collect::<Result<BTreeMap<_, _>, _>>()?;
            Ok(Value::Object(entries))
        }
    }
}

/// Converts a codec value back into a JSON document.
///
/// Fails on the variants JSON cannot express: sentinels, extensions and
/// non-finite numbers.
pub fn value_to_json(value: &Value) -> Result<serde_json::Value, JsonError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Number(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .ok_or(JsonError::UnrepresentableNumber),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Array(items) => {
            items.iter().map(value_to_json).collect::<Result<_, _>>().map(serde_json::Value::Array)
        }
        Value::Object(entries) => {
            let entries = entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), value_to_json(value)?)))
                .collect::<Result<serde_json::Map<_, _>, _>>()?;
            Ok(serde_json::Value::Object(entries))
        }
        Value::Extension(_) => Err(JsonError::Extension),
        Value::Min | Value::Max => Err(JsonError::Sentinel),
    }
}
