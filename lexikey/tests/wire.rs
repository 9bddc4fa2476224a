use std::cmp::Ordering;

use lexikey::types::{
    ArrayEncoding, BoolEncoding, NullEncoding, NumberEncoding, ObjectEncoding, SentinelEncoding,
    StrEncoding,
};
use lexikey::{
    json_codec, json_codec_with_objects, scalar_cmp, BoxedError, Codec, Encoding, Error,
    Extension, NestedCodec, ObjectForm, Value,
};

fn obj(entries: &[(&str, Value)]) -> Value {
    entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn scalar_wire_format() {
    let codec = json_codec();

    assert_eq!(codec.encode(&Value::Null).unwrap(), b"b");
    assert_eq!(codec.encode(&Value::Bool(true)).unwrap(), b"gtrue");
    assert_eq!(codec.encode(&Value::Bool(false)).unwrap(), b"gfalse");
    assert_eq!(codec.encode(&"hello world".into()).unwrap(), b"fhello world");

    let ten = codec.encode(&Value::Number(10.0)).unwrap();
    assert_eq!(ten[0], b'e');
    assert_eq!(ten[1..], lexikey::types::float::encode_f64(10.0)[..]);
}

#[test]
fn tuple_wire_format() {
    let codec = json_codec();
    let tuple = Value::Array(vec!["chet".into(), "corcos".into()]);
    assert_eq!(codec.encode(&tuple).unwrap(), b"dfchet\x00fcorcos\x00");
    assert_eq!(codec.decode(b"dfchet\x00fcorcos\x00").unwrap(), tuple);
}

#[test]
fn flat_object_wire_format() {
    let codec = json_codec();
    let object = obj(&[("date", "2020-03-10".into())]);
    assert_eq!(codec.encode(&object).unwrap(), b"cfdate\x00f2020-03-10\x00");
    assert_eq!(codec.decode(b"cfdate\x00f2020-03-10\x00").unwrap(), object);
}

#[test]
fn paired_object_wire_format() {
    let codec = json_codec_with_objects(ObjectForm::Paired);
    let object = obj(&[("date", "2020-03-10".into())]);

    // The entry is itself an array, so its inner terminators get escaped
    // when the pair becomes one frame of the object body.
    let encoded = codec.encode(&object).unwrap();
    assert_eq!(encoded, b"cdfdate\x01\x00f2020-03-10\x01\x00\x00");
    assert_eq!(codec.decode(&encoded).unwrap(), object);
}

#[test]
fn both_object_forms_order_identically() {
    let flat = json_codec_with_objects(ObjectForm::Flat);
    let paired = json_codec_with_objects(ObjectForm::Paired);

    let small = obj(&[("a", 1.into()), ("b", 2.into())]);
    let large = obj(&[("a", 1.into()), ("c", 0.into())]);

    for codec in [&flat, &paired] {
        assert_eq!(codec.compare(&small, &large).unwrap(), Ordering::Less);
        assert!(codec.encode(&small).unwrap() < codec.encode(&large).unwrap());
    }
}

#[test]
fn sentinel_wire_format() {
    let codec = json_codec();
    assert_eq!(codec.encode(&Value::Min).unwrap(), [0x00]);
    assert_eq!(codec.encode(&Value::Max).unwrap(), [0xFF]);

    // Sentinels decode to the neutral value instead of round-tripping.
    assert_eq!(codec.decode(&[0x00]).unwrap(), Value::Null);
    assert_eq!(codec.decode(&[0xFF]).unwrap(), Value::Null);
}

#[test]
fn control_bytes_survive_inside_tuples() {
    let codec = json_codec();
    let tuple = Value::Array(vec!["a\u{0}b".into(), "\u{1}".into()]);
    let encoded = codec.encode(&tuple).unwrap();
    assert_eq!(encoded, b"dfa\x01\x00b\x00f\x01\x01\x00");
    assert_eq!(codec.decode(&encoded).unwrap(), tuple);
}

#[test]
fn empty_composites_round_trip() {
    let codec = json_codec();
    for value in ["".into(), Value::Array(Vec::new()), obj(&[])] {
        let encoded = codec.encode(&value).unwrap();
        assert_eq!(encoded.len(), 1);
        assert_eq!(codec.decode(&encoded).unwrap(), value);
    }
}

#[test]
fn deep_nesting_round_trips() {
    let codec = json_codec();
    let nested = Value::Array(vec![
        1.into(),
        Value::Array(vec![
            2.into(),
            Value::Array(vec![3.into(), Value::Array(vec![4.into()])]),
        ]),
    ]);
    assert_eq!(codec.decode(&codec.encode(&nested).unwrap()).unwrap(), nested);
}

#[test]
fn nan_is_refused_at_encode_time() {
    let codec = json_codec();
    assert!(matches!(codec.encode(&Value::Number(f64::NAN)), Err(Error::Encoding(_))));
}

#[test]
fn malformed_bodies_are_refused() {
    let codec = json_codec();

    // A frame that never reaches its terminator.
    assert!(matches!(codec.decode(b"dfa"), Err(Error::Decoding(_))));
    // A dangling escape byte.
    assert!(matches!(codec.decode(b"d\x01"), Err(Error::Decoding(_))));
    // A flat object body with an odd number of elements.
    assert!(matches!(codec.decode(b"cfa\x00"), Err(Error::Decoding(_))));
    // A paired object whose entry is not a two-element array.
    let paired = json_codec_with_objects(ObjectForm::Paired);
    assert!(matches!(paired.decode(b"cdfa\x01\x00\x00"), Err(Error::Decoding(_))));
}

struct DateEncoding;

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

fn json_codec_with_dates() -> Codec {
    Codec::builder()
        .register(lexikey::MIN_PREFIX, SentinelEncoding::min())
        .register(lexikey::NULL_PREFIX, NullEncoding)
        .register(lexikey::OBJECT_PREFIX, ObjectEncoding::flat())
        .register(lexikey::ARRAY_PREFIX, ArrayEncoding)
        .register(lexikey::NUMBER_PREFIX, NumberEncoding)
        .register(lexikey::STRING_PREFIX, StrEncoding)
        .register(lexikey::BOOL_PREFIX, BoolEncoding)
        .register(b'h', DateEncoding)
        .register(lexikey::MAX_PREFIX, SentinelEncoding::max())
        .build()
        .unwrap()
}

#[test]
fn registered_extensions_take_their_own_prefix() {
    let codec = json_codec_with_dates();
    let date: Value = Extension::new("date", "2023-11-29T18:44:54.942Z".into()).into();

    let encoded = codec.encode(&date).unwrap();
    assert_eq!(encoded, b"h2023-11-29T18:44:54.942Z");
    assert_eq!(codec.decode(&encoded).unwrap(), date);

    // Dates take a prefix above booleans and below MAX.
    let newer: Value = Extension::new("date", "2024-01-01T00:00:00.000Z".into()).into();
    assert_eq!(codec.compare(&date, &newer).unwrap(), Ordering::Less);
    assert_eq!(codec.compare(&Value::Bool(true), &date).unwrap(), Ordering::Less);
    assert_eq!(codec.compare(&Value::Max, &date).unwrap(), Ordering::Greater);
}

#[test]
fn unregistered_extensions_are_unsupported() {
    let codec = json_codec();
    let date: Value = Extension::new("date", "2023-11-29".into()).into();
    assert!(matches!(codec.encode(&date), Err(Error::UnsupportedValue)));
}
