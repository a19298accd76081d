use core::fmt;

/// A structured error code identifying why an encode, decode, or scan failed.
///
/// This enum is intentionally stable and string-free so that hot paths never
/// format messages they may not need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Input ended inside an item header or payload.
    Truncated,
    /// Arithmetic overflow while computing a length or offset.
    LengthOverflow,

    /// Reserved additional-info value (28..=30) was used.
    ReservedAdditionalInfo,
    /// A break marker (0xff) appeared outside an indefinite-length item.
    UnexpectedBreak,
    /// An indefinite-length item was not terminated by a break marker.
    UnterminatedIndefinite,
    /// Two-byte simple value below 32, which RFC 8949 forbids.
    DisallowedSimpleValue,
    /// Indefinite-length item where a typed read requires a definite length.
    IndefiniteUnsupported,

    /// Item's major type is incompatible with the decoder's expectation.
    TypeMismatch,
    /// Invalid UTF-8 in a text string (safe mode only).
    Utf8Invalid,
    /// Integer value exceeds the target field's range.
    IntegerOverflow,

    /// Nesting depth limit exceeded.
    DepthLimitExceeded,
    /// Array, map, byte-string, or text-string length exceeds decode limits.
    ContainerLimitExceeded,
    /// Total item count exceeds decode limits.
    ItemsLimitExceeded,

    /// Tag 0/1 payload does not describe a representable instant.
    InvalidTime,
}

/// A codec error with a stable code and the byte offset where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CborError {
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset into the input (or output, for encode-side length checks)
    /// where the error was detected.
    pub offset: usize,
}

impl CborError {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }
}

impl fmt::Display for CborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.code {
            ErrorCode::Truncated => "unexpected end of input",
            ErrorCode::LengthOverflow => "length overflow",

            ErrorCode::ReservedAdditionalInfo => "reserved additional info value",
            ErrorCode::UnexpectedBreak => "unexpected break marker",
            ErrorCode::UnterminatedIndefinite => "unterminated indefinite-length item",
            ErrorCode::DisallowedSimpleValue => "two-byte simple value below 32",
            ErrorCode::IndefiniteUnsupported => "indefinite length unsupported here",

            ErrorCode::TypeMismatch => "major type mismatch",
            ErrorCode::Utf8Invalid => "text must be valid UTF-8",
            ErrorCode::IntegerOverflow => "integer out of range for target",

            ErrorCode::DepthLimitExceeded => "nesting depth limit exceeded",
            ErrorCode::ContainerLimitExceeded => "container length exceeds decode limits",
            ErrorCode::ItemsLimitExceeded => "total items limit exceeded",

            ErrorCode::InvalidTime => "tagged time value out of range",
        };

        write!(f, "cbor error at {}: {msg}", self.offset)
    }
}

impl std::error::Error for CborError {}
