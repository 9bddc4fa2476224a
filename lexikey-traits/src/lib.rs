//! Contains the contracts used to encode, decode and compare structured keys.

#![warn(missing_docs)]

mod value;

use std::cmp::Ordering;
use std::error::Error as StdError;

pub use self::value::{Extension, Value};

/// A boxed `Send + Sync + 'static` error.
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// An object-safe view of a whole codec, handed to an [`Encoding`] so that
/// nested values run through the very registry that invoked it.
///
/// Encodings must not keep this handle around; it is only valid for the
/// duration of the call that received it.
pub trait NestedCodec {
    /// Encode a nested value, prefix byte included.
    fn encode(&self, value: &Value) -> Result<Vec<u8>, BoxedError>;

    /// Decode a nested value, prefix byte included.
    fn decode(&self, bytes: &[u8]) -> Result<Value, BoxedError>;

    /// Compare two nested values in encoded-byte order.
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, BoxedError>;
}

/// A registry entry: one encodable variant of the value universe.
///
/// An encoding produces and consumes the *body* of an encoded value; the
/// one-byte prefix that selects the encoding belongs to the registry. The
/// order of the bodies it produces must agree with what
/// [`compare`](Encoding::compare) returns, so that the byte order of whole
/// encoded values equals the semantic order of the values.
pub trait Encoding: Send + Sync {
    /// Whether this encoding claims the given value.
    ///
    /// Within a registry the first registered encoding that matches wins.
    fn matches(&self, value: &Value) -> bool;

    /// Encode the body of `value`, prefix byte excluded.
    fn encode_body(
        &self,
        value: &Value,
        nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError>;

    /// Decode a body produced by [`encode_body`](Encoding::encode_body).
    fn decode_body(
        &self,
        body: &[u8],
        nested: &dyn NestedCodec,
    ) -> Result<Value, BoxedError>;

    /// Compare two values claimed by this encoding, without encoding them.
    fn compare(
        &self,
        a: &Value,
        b: &Value,
        nested: &dyn NestedCodec,
    ) -> Result<Ordering, BoxedError>;
}

/// Compares two naturally ordered scalars.
///
/// Incomparable pairs collapse to `Equal`; every value a codec accepts is
/// comparable, so the collapse is only ever observed on values the codec
/// refuses to encode, like NaN.
pub fn scalar_cmp<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_cmp_follows_natural_order() {
        assert_eq!(scalar_cmp(&1.0, &2.0), Ordering::Less);
        assert_eq!(scalar_cmp("b", "a"), Ordering::Greater);
        assert_eq!(scalar_cmp(&false, &false), Ordering::Equal);
        assert_eq!(scalar_cmp(&-0.0, &0.0), Ordering::Equal);
    }
}
