use once_cell::sync::Lazy;

use crate::types::{
    ArrayEncoding, BoolEncoding, NullEncoding, NumberEncoding, ObjectEncoding, ObjectForm,
    SentinelEncoding, StrEncoding,
};
use crate::Codec;

/// Prefix of the MIN sentinel, the smallest possible byte.
pub const MIN_PREFIX: u8 = 0x00;
/// Prefix of null values.
pub const NULL_PREFIX: u8 = b'b';
/// Prefix of objects.
pub const OBJECT_PREFIX: u8 = b'c';
/// Prefix of arrays.
pub const ARRAY_PREFIX: u8 = b'd';
/// Prefix of numbers.
pub const NUMBER_PREFIX: u8 = b'e';
/// Prefix of strings.
pub const STRING_PREFIX: u8 = b'f';
/// Prefix of booleans.
pub const BOOL_PREFIX: u8 = b'g';
/// Prefix of the MAX sentinel, the largest possible byte.
pub const MAX_PREFIX: u8 = 0xFF;

static JSON_CODEC: Lazy<Codec> = Lazy::new(|| json_codec_with_objects(ObjectForm::Flat));

/// The canonical JSON-style codec, using the flat object form.
///
/// Variants order as
/// `MIN < Null < Object < Array < Number < String < Bool < MAX`.
pub fn json_codec() -> &'static Codec {
    &JSON_CODEC
}

/// Builds a JSON-style codec, choosing how objects lay out their entries.
///
/// [`ObjectForm::Paired`] reads and writes the layout of older deployments;
/// everything else about the codec is identical to [`json_codec`].
pub fn json_codec_with_objects(form: ObjectForm) -> Codec {
    Codec::builder()
        .register(MIN_PREFIX, SentinelEncoding::min())
        .register(NULL_PREFIX, NullEncoding)
        .register(OBJECT_PREFIX, ObjectEncoding::new(form))
        .register(ARRAY_PREFIX, ArrayEncoding)
        .register(NUMBER_PREFIX, NumberEncoding)
        .register(STRING_PREFIX, StrEncoding)
        .register(BOOL_PREFIX, BoolEncoding)
        .register(MAX_PREFIX, SentinelEncoding::max())
        .build()
        .expect("the canonical registry uses distinct prefixes")
}
