use std::cmp::Ordering;
use std::{error, fmt};

use lexikey_traits::{scalar_cmp, BoxedError, Encoding, NestedCodec, Value};

use crate::float::{decode_f64, encode_f64, ENCODED_LEN};

/// Describes the [`Value::Number`] variant through the ordered-double
/// primitive of [`float`](crate::float).
///
/// NaN has no place in a total order and is refused.
pub struct NumberEncoding;

#[derive(Debug)]
struct NanNotOrderable;

impl fmt::Display for NanNotOrderable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("NaN cannot be encoded into an ordered key")
    }
}

impl error::Error for NanNotOrderable {}

impl Encoding for NumberEncoding {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }

    fn encode_body(
        &self,
        value: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError> {
        match *value {
            Value::Number(x) if x.is_nan() => Err(Box::new(NanNotOrderable)),
            Value::Number(x) => Ok(encode_f64(x).to_vec()),
            _ => Err(crate::variant_mismatch("a number")),
        }
    }

    fn decode_body(&self, body: &[u8], _nested: &dyn NestedCodec) -> Result<Value, BoxedError> {
        let buf: [u8; ENCODED_LEN] =
            body.try_into().map_err(|_| crate::body_length(ENCODED_LEN, body.len()))?;
        Ok(Value::Number(decode_f64(buf)))
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Ordering, BoxedError> {
        match (a, b) {
            (Value::Number(a), Value::Number(b)) => Ok(scalar_cmp(a, b)),
            _ => Err(crate::variant_mismatch("a number")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::NoNesting;

    #[test]
    fn round_trip() {
        for x in [-1.5, 0.0, 10.0, f64::MAX] {
            let encoded = NumberEncoding.encode_body(&Value::Number(x), &NoNesting).unwrap();
            assert_eq!(encoded.len(), ENCODED_LEN);
            assert_eq!(
                NumberEncoding.decode_body(&encoded, &NoNesting).unwrap(),
                Value::Number(x),
            );
        }
    }

    #[test]
    fn nan_is_refused() {
        assert!(NumberEncoding.encode_body(&Value::Number(f64::NAN), &NoNesting).is_err());
    }

    #[test]
    fn truncated_body_is_refused() {
        assert!(NumberEncoding.decode_body(&[0x80, 0x00], &NoNesting).is_err());
    }
}
