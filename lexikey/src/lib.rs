//! `lexikey` turns structured values into byte keys whose natural
//! lexicographic order equals the semantic order of the values.
//!
//! Ordered key-value stores compare keys byte by byte. This crate lets them
//! index structured tuples anyway: every value is encoded behind a one-byte
//! prefix selecting its variant, sequences are framed so that they stay
//! self-delimiting without disturbing the order, and numbers go through an
//! order-preserving double encoding. Because the byte order and the
//! in-memory [`Codec::compare`] always agree, range scans over the encoded
//! keys behave exactly like comparisons over the original values.
//!
//! # Examples
//!
//! ```
//! use lexikey::{json_codec, Value};
//!
//! # fn main() -> lexikey::Result<()> {
//! let codec = json_codec();
//!
//! // Keys order component-wise: "jon" < "jonathan" decides the pair.
//! let a = codec.encode(&Value::Array(vec!["jon".into(), "smith".into()]))?;
//! let b = codec.encode(&Value::Array(vec!["jonathan".into(), "smith".into()]))?;
//! assert!(a < b);
//!
//! // Whatever an ordered store does with the bytes in between, decoding
//! // them yields the original value back.
//! assert_eq!(codec.decode(&a)?, Value::Array(vec!["jon".into(), "smith".into()]));
//! # Ok(()) }
//! ```
//!
//! Range queries use the [`Value::Min`] and [`Value::Max`] sentinels as
//! inclusive bounds:
//!
//! ```
//! use lexikey::{json_codec, Value};
//!
//! # fn main() -> lexikey::Result<()> {
//! let codec = json_codec();
//! let low = codec.encode(&Value::Array(vec!["jon".into(), Value::Min]))?;
//! let high = codec.encode(&Value::Array(vec!["jon".into(), Value::Max]))?;
//! let key = codec.encode(&Value::Array(vec!["jon".into(), "smith".into()]))?;
//! assert!(low < key && key < high);
//! # Ok(()) }
//! ```

#![warn(missing_docs)]

mod codec;
mod json;

use std::{error, fmt, result};

pub use lexikey_traits::{scalar_cmp, BoxedError, Encoding, Extension, NestedCodec, Value};
pub use lexikey_types as types;

pub use self::codec::{Codec, CodecBuilder};
pub use self::json::{
    json_codec, json_codec_with_objects, ARRAY_PREFIX, BOOL_PREFIX, MAX_PREFIX, MIN_PREFIX,
    NULL_PREFIX, NUMBER_PREFIX, OBJECT_PREFIX, STRING_PREFIX,
};
pub use self::types::ObjectForm;

/// An error that encapsulates all possible errors in this crate.
#[derive(Debug)]
pub enum Error {
    /// No registered encoding claims the value given to encode or compare.
    UnsupportedValue,
    /// Decoding input began with a prefix byte that is not registered.
    UnknownPrefix(u8),
    /// Decoding input was empty; every encoded value carries at least its
    /// prefix byte.
    EmptyInput,
    /// Codec construction registered the same prefix byte twice.
    DuplicatePrefix(u8),
    /// Encoding error.
    Encoding(BoxedError),
    /// Decoding error.
    Decoding(BoxedError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnsupportedValue => f.write_str("no registered encoding matches the value"),
            Error::UnknownPrefix(byte) => {
                write!(f, "unknown prefix byte {byte:#04x} while decoding")
            }
            Error::EmptyInput => f.write_str("cannot decode an empty byte string"),
            Error::DuplicatePrefix(byte) => {
                write!(f, "prefix byte {byte:#04x} registered twice")
            }
            Error::Encoding(error) => write!(f, "error while encoding: {}", error),
            Error::Decoding(error) => write!(f, "error while decoding: {}", error),
        }
    }
}

impl error::Error for Error {}

/// Either a success or an [`Error`].
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_send_sync() {
        fn give_me_send_sync<T: Send + Sync>(_: T) {}

        let error = Error::Encoding(Box::from("There is an issue, you know?"));
        give_me_send_sync(error);
    }
}
