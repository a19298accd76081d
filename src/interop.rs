//! Tag numbers and wrapper-key names shared with the JSON interop layer.
//!
//! The interop layer round-trips tagged CBOR through JSON wrapper objects
//! (`{"$uri": "..."}` and friends). The core only owns the table; building
//! and interpreting wrapper objects happens in the collaborator.

use crate::encode::put_tag;

/// Tag 0: RFC 3339 text time.
pub const TAG_RFC3339: u64 = 0;
/// Tag 1: epoch seconds.
pub const TAG_EPOCH: u64 = 1;
/// Tag 4: decimal fraction `[exp, mant]`.
pub const TAG_DECIMAL: u64 = 4;
/// Tag 5: bigfloat `[exp, mant]`.
pub const TAG_BIGFLOAT: u64 = 5;
/// Tag 21: byte string, base64url when shown in JSON.
pub const TAG_BASE64URL: u64 = 21;
/// Tag 22: byte string, base64 when shown in JSON.
pub const TAG_BASE64: u64 = 22;
/// Tag 23: byte string, base16 when shown in JSON.
pub const TAG_BASE16: u64 = 23;
/// Tag 24: embedded CBOR byte string.
pub const TAG_EMBEDDED_CBOR: u64 = 24;
/// Tag 32: URI text.
pub const TAG_URI: u64 = 32;
/// Tag 33: base64url-encoded text.
pub const TAG_BASE64URL_TEXT: u64 = 33;
/// Tag 34: base64-encoded text.
pub const TAG_BASE64_TEXT: u64 = 34;
/// Tag 35: regular expression text.
pub const TAG_REGEX: u64 = 35;
/// Tag 36: MIME message text.
pub const TAG_MIME: u64 = 36;
/// Tag 37: binary UUID.
pub const TAG_UUID: u64 = 37;
/// Tag 1000: duration in nanoseconds (bespoke).
pub const TAG_DURATION: u64 = 1000;
/// Tag 55799: self-described CBOR.
pub const TAG_SELF_DESCRIBE: u64 = 55799;

/// Wrapper key carrying the tag number of an arbitrary tagged value.
pub const WRAPPER_TAG_KEY: &str = "$tag";
/// Wrapper key carrying the content of an arbitrary tagged value.
pub const WRAPPER_CONTENT_KEY: &str = "$";

/// The JSON wrapper key for a known tag, if one is assigned.
#[must_use]
pub const fn wrapper_key(tag: u64) -> Option<&'static str> {
    match tag {
        TAG_RFC3339 => Some("$rfc3339"),
        TAG_EPOCH => Some("$epoch"),
        TAG_DECIMAL => Some("$decimal"),
        TAG_BIGFLOAT => Some("$bigfloat"),
        TAG_BASE64URL => Some("$base64url"),
        TAG_BASE64 => Some("$base64"),
        TAG_BASE16 => Some("$base16"),
        TAG_EMBEDDED_CBOR => Some("$cbor"),
        TAG_URI => Some("$uri"),
        TAG_BASE64URL_TEXT => Some("$base64urlstr"),
        TAG_BASE64_TEXT => Some("$base64str"),
        TAG_REGEX => Some("$regex"),
        TAG_MIME => Some("$mime"),
        TAG_UUID => Some("$uuid"),
        TAG_SELF_DESCRIBE => Some("$selfdescribe"),
        _ => None,
    }
}

/// The tag number for a JSON wrapper key, if the key names a known tag.
///
/// The generic `$tag`/`$` pair is not in this table; its tag number travels
/// as data.
#[must_use]
pub fn wrapper_tag(key: &str) -> Option<u64> {
    Some(match key {
        "$rfc3339" => TAG_RFC3339,
        "$epoch" => TAG_EPOCH,
        "$decimal" => TAG_DECIMAL,
        "$bigfloat" => TAG_BIGFLOAT,
        "$base64url" => TAG_BASE64URL,
        "$base64" => TAG_BASE64,
        "$base16" => TAG_BASE16,
        "$cbor" => TAG_EMBEDDED_CBOR,
        "$uri" => TAG_URI,
        "$base64urlstr" => TAG_BASE64URL_TEXT,
        "$base64str" => TAG_BASE64_TEXT,
        "$regex" => TAG_REGEX,
        "$mime" => TAG_MIME,
        "$uuid" => TAG_UUID,
        "$selfdescribe" => TAG_SELF_DESCRIBE,
        _ => return None,
    })
}

/// Prefix the buffer with the self-describe tag (55799).
pub fn put_self_describe(buf: &mut Vec<u8>) {
    put_tag(buf, TAG_SELF_DESCRIBE);
}
