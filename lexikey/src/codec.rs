use std::cmp::Ordering;
use std::{fmt, ptr};

use lexikey_traits::{BoxedError, Encoding, NestedCodec, Value};

use crate::{Error, Result};

struct Entry {
    prefix: u8,
    encoding: Box<dyn Encoding>,
}

/// An immutable registry of prefix-tagged encodings and the three
/// operations that run through it.
///
/// A codec holds no mutable state: once built it can be shared freely
/// between threads and every operation is a pure function of its arguments.
/// Operations recurse as deep as the value nests; callers feeding untrusted
/// input should bound that depth themselves.
pub struct Codec {
    entries: Vec<Entry>,
}

impl Codec {
    /// Starts assembling a codec from an ordered list of registrations.
    pub fn builder() -> CodecBuilder {
        CodecBuilder { entries: Vec::new() }
    }

    /// Encodes `value` as its prefix byte followed by the variant body.
    ///
    /// The first registered encoding whose match predicate claims `value`
    /// is used; [`Error::UnsupportedValue`] is returned when none does.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let entry = self.entry_for(value).ok_or(Error::UnsupportedValue)?;
        let body =
            entry.encoding.encode_body(value, &Nested(self)).map_err(encoding_error)?;
        let mut bytes = Vec::with_capacity(1 + body.len());
        bytes.push(entry.prefix);
        bytes.extend_from_slice(&body);
        Ok(bytes)
    }

    /// Decodes bytes produced by [`encode`](Codec::encode).
    ///
    /// The leading byte selects the encoding; the rest is handed to it as
    /// the body.
    pub fn decode(&self, bytes: &[u8]) -> Result<Value> {
        let (&prefix, body) = bytes.split_first().ok_or(Error::EmptyInput)?;
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.prefix == prefix)
            .ok_or(Error::UnknownPrefix(prefix))?;
        entry.encoding.decode_body(body, &Nested(self)).map_err(decoding_error)
    }

    /// Compares two values in encoded-byte order without encoding them.
    ///
    /// Values claimed by different encodings order by their prefix bytes;
    /// values claimed by the same encoding order by its comparator.
    pub fn compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        if ptr::eq(a, b) {
            return Ok(Ordering::Equal);
        }
        let entry_a = self.entry_for(a).ok_or(Error::UnsupportedValue)?;
        let entry_b = self.entry_for(b).ok_or(Error::UnsupportedValue)?;
        if entry_a.prefix != entry_b.prefix {
            return Ok(entry_a.prefix.cmp(&entry_b.prefix));
        }
        entry_a.encoding.compare(a, b, &Nested(self)).map_err(encoding_error)
    }

    fn entry_for(&self, value: &Value) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.encoding.matches(value))
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefixes: Vec<u8> = self.entries.iter().map(|entry| entry.prefix).collect();
        f.debug_struct("Codec").field("prefixes", &prefixes).finish_non_exhaustive()
    }
}

/// The recursion handle encodings receive, borrowing the codec for the
/// duration of one operation.
struct Nested<'c>(&'c Codec);

impl NestedCodec for Nested<'_> {
    fn encode(&self, value: &Value) -> std::result::Result<Vec<u8>, BoxedError> {
        self.0.encode(value).map_err(Into::into)
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<Value, BoxedError> {
        self.0.decode(bytes).map_err(Into::into)
    }

    fn compare(&self, a: &Value, b: &Value) -> std::result::Result<Ordering, BoxedError> {
        self.0.compare(a, b).map_err(Into::into)
    }
}

// Nested failures come back as a boxed crate error; unwrap those instead of
// wrapping them a second time.
fn encoding_error(error: BoxedError) -> Error {
    match error.downcast::<Error>() {
        Ok(inner) => *inner,
        Err(error) => Error::Encoding(error),
    }
}

fn decoding_error(error: BoxedError) -> Error {
    match error.downcast::<Error>() {
        Ok(inner) => *inner,
        Err(error) => Error::Decoding(error),
    }
}

/// Options and registrations used to create a [`Codec`].
///
/// Registration order is significant: `encode` and `compare` pick the first
/// registration whose match predicate claims the value, which is how
/// overlapping matchers are disambiguated. An extension whose values would
/// also be claimed by a built-in must be registered before it.
pub struct CodecBuilder {
    entries: Vec<Entry>,
}

impl CodecBuilder {
    /// Registers `encoding` under the given prefix byte, after every
    /// registration made so far.
    pub fn register(mut self, prefix: u8, encoding: impl Encoding + 'static) -> CodecBuilder {
        self.entries.push(Entry { prefix, encoding: Box::new(encoding) });
        self
    }

    /// Checks prefix uniqueness and freezes the registry.
    pub fn build(self) -> Result<Codec> {
        let mut seen = [false; 256];
        for entry in &self.entries {
            if std::mem::replace(&mut seen[entry.prefix as usize], true) {
                return Err(Error::DuplicatePrefix(entry.prefix));
            }
        }
        Ok(Codec { entries: self.entries })
    }
}
