use std::cmp::Ordering;

use lexikey_traits::{BoxedError, Encoding, NestedCodec, Value};

use crate::escape;

/// Describes the [`Value::Array`] variant: one frame per element, each
/// element recursively encoded through the registry that owns this encoding.
pub struct ArrayEncoding;

impl Encoding for ArrayEncoding {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }

    fn encode_body(
        &self,
        value: &Value,
        nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError> {
        let Value::Array(items) = value else {
            return Err(crate::variant_mismatch("an array"));
        };
        let mut body = Vec::new();
        for item in items {
            let encoded = nested.encode(item)?;
            escape::push_frame(&mut body, &encoded);
        }
        Ok(body)
    }

    fn decode_body(&self, body: &[u8], nested: &dyn NestedCodec) -> Result<Value, BoxedError> {
        let mut items = Vec::new();
        for element in escape::split_frames(body)? {
            items.push(nested.decode(&element)?);
        }
        Ok(Value::Array(items))
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        nested: &dyn NestedCodec,
    ) -> Result<Ordering, BoxedError> {
        let (Value::Array(a), Value::Array(b)) = (a, b) else {
            return Err(crate::variant_mismatch("an array"));
        };
        for (x, y) in a.iter().zip(b) {
            match nested.compare(x, y)? {
                Ordering::Equal => continue,
                unequal => return Ok(unequal),
            }
        }
        Ok(a.len().cmp(&b.len()))
    }
}
