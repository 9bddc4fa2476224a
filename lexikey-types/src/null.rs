use std::cmp::Ordering;

use lexikey_traits::{BoxedError, Encoding, NestedCodec, Value};

/// Describes the [`Value::Null`] variant: an empty body, every null equal.
pub struct NullEncoding;

impl Encoding for NullEncoding {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Null)
    }

    fn encode_body(
        &self,
        value: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError> {
        match value {
            Value::Null => Ok(Vec::new()),
            _ => Err(crate::variant_mismatch("a null")),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::NoNesting;

    #[test]
    fn empty_body_only() {
        let null = NullEncoding.encode_body(&Value::Null, &NoNesting).unwrap();
        assert!(null.is_empty());
        assert_eq!(NullEncoding.decode_body(&null, &NoNesting).unwrap(), Value::Null);
        assert!(NullEncoding.decode_body(b"x", &NoNesting).is_err());
    }
}
