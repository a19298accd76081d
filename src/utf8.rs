#[cfg(feature = "simdutf8")]
use simdutf8::basic as simd_utf8;

/// Validates UTF-8 bytes and returns a borrowed `&str` on success.
#[inline]
pub fn validate(bytes: &[u8]) -> Result<&str, ()> {
    #[cfg(feature = "simdutf8")]
    {
        simd_utf8::from_utf8(bytes).map_err(|_| ())
    }

    #[cfg(not(feature = "simdutf8"))]
    {
        core::str::from_utf8(bytes).map_err(|_| ())
    }
}

/// Returns a `&str` from trusted bytes without validation.
///
/// Callers must only pass bytes whose UTF-8 validity is guaranteed, either by
/// a prior [`crate::well_formed_item`] pass or by the trusted-mode contract
/// that the producer of the buffer emitted valid text.
#[inline]
#[allow(unsafe_code)]
pub fn trusted(bytes: &[u8]) -> &str {
    // Safety: validity is guaranteed by the scanner or the trusted-input
    // contract documented on the trusted decode entry points.
    unsafe { core::str::from_utf8_unchecked(bytes) }
}
