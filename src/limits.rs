/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default maximum container length for arrays and maps.
///
/// This is a safety limit; adjust explicitly for your deployment.
pub const DEFAULT_MAX_CONTAINER_LEN: usize = 1 << 20;

/// Default maximum byte-string / text-string payload length.
pub const DEFAULT_MAX_STRING_LEN: usize = 1 << 28;

/// Default maximum total count of items in a single document.
pub const DEFAULT_MAX_TOTAL_ITEMS: usize = 1 << 24;

/// Decode-time resource limits applied by the well-formedness scanner and the
/// safe read surface.
///
/// Limits are enforced deterministically; trusted-mode reads skip them on the
/// assumption that the caller vouches for the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum nesting depth.
    pub max_depth: usize,
    /// Maximum array length (items).
    pub max_array_len: usize,
    /// Maximum map length (pairs).
    pub max_map_len: usize,
    /// Maximum byte-string payload length.
    pub max_bytes_len: usize,
    /// Maximum text-string payload length in UTF-8 bytes.
    pub max_text_len: usize,
    /// Maximum total count of items:
    /// `sum(array_len) + sum(2 * map_pairs)` across the entire document.
    pub max_total_items: usize,
}

impl DecodeLimits {
    /// Construct conservative limits derived from a maximum document size.
    ///
    /// A definite-length item always occupies at least one input byte, so
    /// capping lengths and item counts at the document size rejects any header
    /// that promises more content than the input can hold.
    #[must_use]
    pub fn for_bytes(max_document_bytes: usize) -> Self {
        let max_container = max_document_bytes.min(DEFAULT_MAX_CONTAINER_LEN);
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_len: max_container,
            max_map_len: max_container,
            max_bytes_len: max_document_bytes,
            max_text_len: max_document_bytes,
            max_total_items: max_document_bytes,
        }
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_len: DEFAULT_MAX_CONTAINER_LEN,
            max_map_len: DEFAULT_MAX_CONTAINER_LEN,
            max_bytes_len: DEFAULT_MAX_STRING_LEN,
            max_text_len: DEFAULT_MAX_STRING_LEN,
            max_total_items: DEFAULT_MAX_TOTAL_ITEMS,
        }
    }
}
