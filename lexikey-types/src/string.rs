use std::cmp::Ordering;
use std::str;

use lexikey_traits::{scalar_cmp, BoxedError, Encoding, NestedCodec, Value};

/// Describes the [`Value::String`] variant: the body is the identity over
/// the raw UTF-8 bytes, and `str` ordering is exactly that byte order.
pub struct StrEncoding;

impl Encoding for StrEncoding {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn encode_body(
        &self,
        value: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError> {
        match value {
            Value::String(s) => Ok(s.as_bytes().to_vec()),
            _ => Err(crate::variant_mismatch("a string")),
        }
    }

    fn decode_body(&self, body: &[u8], _nested: &dyn NestedCodec) -> Result<Value, BoxedError> {
        let s = str::from_utf8(body)?;
        Ok(Value::String(s.to_owned()))
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Ordering, BoxedError> {
        match (a, b) {
            (Value::String(a), Value::String(b)) => Ok(scalar_cmp(a.as_str(), b.as_str())),
            _ => Err(crate::variant_mismatch("a string")),
        }
    }
}
