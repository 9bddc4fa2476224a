use std::cmp::Ordering;
use std::{error, fmt};

use lexikey_traits::{scalar_cmp, BoxedError, Encoding, NestedCodec, Value};

/// Describes the [`Value::Bool`] variant.
///
/// The body is the literal bytes of `true` or `false`, which happen to sort
/// the way booleans do: `"false"` < `"true"` because `f` < `t`.
pub struct BoolEncoding;

#[derive(Debug)]
struct InvalidBoolean;

impl fmt::Display for InvalidBoolean {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("boolean body is neither `true` nor `false`")
    }
}

impl error::Error for InvalidBoolean {}

impl Encoding for BoolEncoding {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn encode_body(
        &self,
        value: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError> {
        match value {
            Value::Bool(true) => Ok(b"true".to_vec()),
            Value::Bool(false) => Ok(b"false".to_vec()),
            _ => Err(crate::variant_mismatch("a boolean")),
        }
    }

    fn decode_body(&self, body: &[u8], _nested: &dyn NestedCodec) -> Result<Value, BoxedError> {
        match body {
            b"true" => Ok(Value::Bool(true)),
            b"false" => Ok(Value::Bool(false)),
            _ => Err(Box::new(InvalidBoolean)),
        }
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Ordering, BoxedError> {
        match (a, b) {
            (Value::Bool(a), Value::Bool(b)) => Ok(scalar_cmp(a, b)),
            _ => Err(crate::variant_mismatch("a boolean")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::NoNesting;

    #[test]
    fn textual_bodies() {
        let t = BoolEncoding.encode_body(&Value::Bool(true), &NoNesting).unwrap();
        let f = BoolEncoding.encode_body(&Value::Bool(false), &NoNesting).unwrap();
        assert_eq!(t, b"true");
        assert_eq!(f, b"false");
        // false < true holds in byte order as well.
        assert!(f < t);
        assert_eq!(BoolEncoding.decode_body(&t, &NoNesting).unwrap(), Value::Bool(true));
        assert_eq!(BoolEncoding.decode_body(&f, &NoNesting).unwrap(), Value::Bool(false));
        assert!(BoolEncoding.decode_body(b"maybe", &NoNesting).is_err());
    }
}
