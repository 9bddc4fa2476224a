//! Encodings that can be registered to build an order-preserving codec.

#![warn(missing_docs)]

mod array;
mod boolean;
pub mod escape;
pub mod float;
mod null;
mod number;
mod object;
mod sentinel;
mod string;

#[cfg(feature = "serde-json")]
mod serde_json;

use std::fmt;

use lexikey_traits::BoxedError;

pub use self::array::ArrayEncoding;
pub use self::boolean::BoolEncoding;
pub use self::null::NullEncoding;
pub use self::number::NumberEncoding;
pub use self::object::{ObjectEncoding, ObjectForm};
pub use self::sentinel::SentinelEncoding;
#[cfg(feature = "serde-json")]
pub use self::serde_json::{value_from_json, value_to_json, JsonError};
pub use self::string::StrEncoding;

/// An encoding received a value outside the variant it claims.
#[derive(Debug)]
struct VariantMismatch {
    expected: &'static str,
}

impl fmt::Display for VariantMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected {} value", self.expected)
    }
}

impl std::error::Error for VariantMismatch {}

pub(crate) fn variant_mismatch(expected: &'static str) -> BoxedError {
    Box::new(VariantMismatch { expected })
}

/// A fixed-size body had the wrong length.
#[derive(Debug)]
struct BodyLength {
    expected: usize,
    got: usize,
}

impl fmt::Display for BodyLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid body length: expected {} bytes, got {}", self.expected, self.got)
    }
}

impl std::error::Error for BodyLength {}

pub(crate) fn body_length(expected: usize, got: usize) -> BoxedError {
    Box::new(BodyLength { expected, got })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cmp::Ordering;

    use lexikey_traits::{BoxedError, NestedCodec, Value};

    /// Scalar encodings never recurse; make any attempt loud.
    pub(crate) struct NoNesting;

    impl NestedCodec for NoNesting {
        fn encode(&self, _value: &Value) -> Result<Vec<u8>, BoxedError> {
            unreachable!("scalar encoding recursed into the codec")
        }

        fn decode(&self, _bytes: &[u8]) -> Result<Value, BoxedError> {
            unreachable!("scalar encoding recursed into the codec")
        }

        fn compare(&self, _a: &Value, _b: &Value) -> Result<Ordering, BoxedError> {
            unreachable!("scalar encoding recursed into the codec")
        }
    }
}
