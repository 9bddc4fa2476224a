use std::cmp::Ordering;

use lexikey_traits::{BoxedError, Encoding, NestedCodec, Value};

/// Describes one of the [`Value::Min`] / [`Value::Max`] range bounds.
///
/// A sentinel encodes to an empty body under a prefix chosen to sit below or
/// above every other registered prefix. Sentinels exist to form inclusive
/// range boundaries and are not meant to round-trip: decoding one yields
/// [`Value::Null`].
pub struct SentinelEncoding {
    max: bool,
}

impl SentinelEncoding {
    /// The sentinel that sorts below every encodable value.
    pub fn min() -> SentinelEncoding {
        SentinelEncoding { max: false }
    }

    /// The sentinel that sorts above every encodable value.
    pub fn max() -> SentinelEncoding {
        SentinelEncoding { max: true }
    }
}

impl Encoding for SentinelEncoding {
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Min => !self.max,
            Value::Max => self.max,
            _ => false,
        }
    }

    fn encode_body(
        &self,
        value: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError> {
        if self.matches(value) {
            Ok(Vec::new())
        } else {
            Err(crate::variant_mismatch("a sentinel"))
        }
    }

    fn decode_body(&self, body: &[u8], _nested: &dyn NestedCodec) -> Result<Value, BoxedError> {
        if body.is_empty() {
            Ok(Value::Null)
        } else {
            Err(crate::body_length(0, body.len()))
        }
    }

    fn compare(
        &self,
        _a: &Value,
        _b: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Ordering, BoxedError> {
        Ok(Ordering::Equal)
    }
}
