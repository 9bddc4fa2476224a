use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::{error, fmt};

use lexikey_traits::{scalar_cmp, BoxedError, Encoding, NestedCodec, Value};

use crate::escape;

/// How object entries are laid out inside the sequence framing.
///
/// Both forms produce the same ordering; the paired form only exists for
/// data written by older deployments and a codec selects exactly one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ObjectForm {
    /// Entries flattened to `[k0, v0, k1, v1, ...]`.
    #[default]
    Flat,
    /// Entries as two-element arrays `[[k0, v0], [k1, v1], ...]`.
    Paired,
}

/// Describes the [`Value::Object`] variant.
///
/// Entries are canonicalized by ascending key before framing, so two objects
/// with equal entries encode identically whatever order they were built in.
/// Comparison is entry-wise with the key compared before the value.
pub struct ObjectEncoding {
    form: ObjectForm,
}

#[derive(Debug)]
enum ObjectBodyError {
    OddElementCount(usize),
    NonStringKey,
    MalformedPair,
}

impl fmt::Display for ObjectBodyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ObjectBodyError::OddElementCount(count) => {
                write!(f, "flat object body holds an odd number of elements: {count}")
            }
            ObjectBodyError::NonStringKey => f.write_str("object key is not a string"),
            ObjectBodyError::MalformedPair => {
                f.write_str("paired object entry is not a two-element array")
            }
        }
    }
}

impl error::Error for ObjectBodyError {}

impl ObjectEncoding {
    /// An encoding using the given entry layout.
    pub fn new(form: ObjectForm) -> ObjectEncoding {
        ObjectEncoding { form }
    }

    /// The flat entry layout.
    pub fn flat() -> ObjectEncoding {
        ObjectEncoding::new(ObjectForm::Flat)
    }

    /// The legacy paired entry layout.
    pub fn paired() -> ObjectEncoding {
        ObjectEncoding::new(ObjectForm::Paired)
    }

    /// The entry layout selected at construction.
    pub fn form(&self) -> ObjectForm {
        self.form
    }
}

impl Encoding for ObjectEncoding {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Object(_))
    }

    fn encode_body(
        &self,
        value: &Value,
        nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError> {
        let Value::Object(entries) = value else {
            return Err(crate::variant_mismatch("an object"));
        };
        // BTreeMap iteration is already in ascending key order.
        let mut body = Vec::new();
        match self.form {
            ObjectForm::Flat => {
                for (key, value) in entries {
                    let key = nested.encode(&Value::String(key.clone()))?;
                    escape::push_frame(&mut body, &key);
                    let value = nested.encode(value)?;
                    escape::push_frame(&mut body, &value);
                }
            }
            ObjectForm::Paired => {
                for (key, value) in entries {
                    let pair =
                        Value::Array(vec![Value::String(key.clone()), value.clone()]);
                    let pair = nested.encode(&pair)?;
                    escape::push_frame(&mut body, &pair);
                }
            }
        }
        Ok(body)
    }

    fn decode_body(&self, body: &[u8], nested: &dyn NestedCodec) -> Result<Value, BoxedError> {
        let elements = escape::split_frames(body)?;
        let mut entries = BTreeMap::new();
        match self.form {
            ObjectForm::Flat => {
                if elements.len() % 2 != 0 {
                    return Err(Box::new(ObjectBodyError::OddElementCount(elements.len())));
                }
                for pair in elements.chunks_exact(2) {
                    let Value::String(key) = nested.decode(&pair[0])? else {
                        return Err(Box::new(ObjectBodyError::NonStringKey));
                    };
                    entries.insert(key, nested.decode(&pair[1])?);
                }
            }
            ObjectForm::Paired => {
                for element in &elements {
                    let Value::Array(pair) = nested.decode(element)? else {
                        return Err(Box::new(ObjectBodyError::MalformedPair));
                    };
                    let [key, value]: [Value; 2] =
                        pair.try_into().map_err(|_| ObjectBodyError::MalformedPair)?;
                    let Value::String(key) = key else {
                        return Err(Box::new(ObjectBodyError::NonStringKey));
                    };
                    entries.insert(key, value);
                }
            }
        }
        Ok(Value::Object(entries))
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        nested: &dyn NestedCodec,
    ) -> Result<Ordering, BoxedError> {
        let (Value::Object(a), Value::Object(b)) = (a, b) else {
            return Err(crate::variant_mismatch("an object"));
        };
        for ((ka, va), (kb, vb)) in a.iter().zip(b) {
            match scalar_cmp(ka.as_str(), kb.as_str()) {
                Ordering::Equal => {}
                unequal => return Ok(unequal),
            }
            match nested.compare(va, vb)? {
                Ordering::Equal => {}
                unequal => return Ok(unequal),
            }
        }
        Ok(a.len().cmp(&b.len()))
    }
}
