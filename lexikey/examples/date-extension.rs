use std::cmp::Ordering;
use std::error::Error;

use lexikey::types::{
    ArrayEncoding, BoolEncoding, NullEncoding, NumberEncoding, ObjectEncoding, SentinelEncoding,
    StrEncoding,
};
use lexikey::{scalar_cmp, BoxedError, Codec, Encoding, Extension, NestedCodec, Value};

struct DateEncoding;

// Dates are kept as ISO-8601 strings, whose byte order is already
// chronological order, so the body is the identity over those bytes.
impl Encoding for DateEncoding {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Extension(ext) if ext.name() == "date")
    }

    fn encode_body(
        &self,
        value: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Vec<u8>, BoxedError> {
        match value {
            Value::Extension(ext) if ext.name() == "date" => match ext.data() {
                Value::String(iso) => Ok(iso.as_bytes().to_vec()),
                _ => Err("date payload must be an ISO-8601 string".into()),
            },
            _ => Err("not a date".into()),
        }
    }

    fn decode_body(&self, body: &[u8], _nested: &dyn NestedCodec) -> Result<Value, BoxedError> {
        let iso = std::str::from_utf8(body)?;
        Ok(Extension::new("date", iso.into()).into())
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        _nested: &dyn NestedCodec,
    ) -> Result<Ordering, BoxedError> {
        match (a, b) {
            (Value::Extension(a), Value::Extension(b)) => match (a.data(), b.data()) {
                (Value::String(a), Value::String(b)) => Ok(scalar_cmp(a.as_str(), b.as_str())),
                _ => Err("date payload must be an ISO-8601 string".into()),
            },
            _ => Err("not a date".into()),
        }
    }
}

fn date(iso: &str) -> Value {
    Extension::new("date", iso.into()).into()
}

fn main() -> Result<(), Box<dyn Error>> {
    // The canonical registry plus one extension: dates take the prefix
    // right above booleans, so they sort between booleans and MAX.
    let codec = Codec::builder()
        .register(lexikey::MIN_PREFIX, SentinelEncoding::min())
        .register(lexikey::NULL_PREFIX, NullEncoding)
        .register(lexikey::OBJECT_PREFIX, ObjectEncoding::flat())
        .register(lexikey::ARRAY_PREFIX, ArrayEncoding)
        .register(lexikey::NUMBER_PREFIX, NumberEncoding)
        .register(lexikey::STRING_PREFIX, StrEncoding)
        .register(lexikey::BOOL_PREFIX, BoolEncoding)
        .register(b'h', DateEncoding)
        .register(lexikey::MAX_PREFIX, SentinelEncoding::max())
        .build()?;

    let birthday = date("2023-11-29T18:44:54.942Z");
    let encoded = codec.encode(&birthday)?;
    assert_eq!(encoded, b"h2023-11-29T18:44:54.942Z");
    assert_eq!(codec.decode(&encoded)?, birthday);

    // Byte order is chronological order.
    let newer = codec.encode(&date("2024-01-01T00:00:00.000Z"))?;
    assert!(encoded < newer);

    // And the whole codec order still holds around the new variant.
    assert!(codec.encode(&Value::Bool(true))? < encoded);
    assert!(newer < codec.encode(&Value::Max)?);
    assert_eq!(codec.compare(&birthday, &Value::Max)?, Ordering::Less);

    Ok(())
}
