//! Append-side primitives.
//!
//! Every operation appends exactly one item (or one item header) to a
//! caller-owned buffer, always selecting the shortest legal encoding. The
//! buffer is never touched beyond appending, so concurrent encoders over
//! disjoint buffers need no coordination.

use half::f16;

use crate::{CborError, ErrorCode};

#[inline]
fn put_major(buf: &mut Vec<u8>, major: u8, value: u64) {
    debug_assert!(major <= 7);
    if value < 24 {
        buf.push((major << 5) | value as u8);
    } else if value <= 0xff {
        buf.push((major << 5) | 24);
        buf.push(value as u8);
    } else if value <= 0xffff {
        buf.push((major << 5) | 25);
        buf.extend_from_slice(&(value as u16).to_be_bytes());
    } else if value <= 0xffff_ffff {
        buf.push((major << 5) | 26);
        buf.extend_from_slice(&(value as u32).to_be_bytes());
    } else {
        buf.push((major << 5) | 27);
        buf.extend_from_slice(&value.to_be_bytes());
    }
}

/// Append an unsigned integer (major 0).
#[inline]
pub fn put_u64(buf: &mut Vec<u8>, v: u64) {
    put_major(buf, 0, v);
}

/// Append a negative integer (major 1) encoding the value `-1 - n`.
#[inline]
pub fn put_neg_u64(buf: &mut Vec<u8>, n: u64) {
    put_major(buf, 1, n);
}

/// Append a signed integer, selecting major 0 or 1 by sign.
#[inline]
pub fn put_i64(buf: &mut Vec<u8>, v: i64) {
    if v >= 0 {
        put_major(buf, 0, v as u64);
    } else {
        // -1 - v cannot overflow: v < 0.
        put_major(buf, 1, !(v as u64));
    }
}

/// Append a definite-length byte string (major 2).
#[inline]
pub fn put_bytes(buf: &mut Vec<u8>, b: &[u8]) {
    put_major(buf, 2, b.len() as u64);
    buf.extend_from_slice(b);
}

/// Append a definite-length text string (major 3).
///
/// `str` guarantees valid UTF-8.
#[inline]
pub fn put_text(buf: &mut Vec<u8>, s: &str) {
    let b = s.as_bytes();
    put_major(buf, 3, b.len() as u64);
    buf.extend_from_slice(b);
}

/// Append a definite-length array header (major 4) declaring `n` items.
#[inline]
pub fn put_array_header(buf: &mut Vec<u8>, n: u32) {
    put_major(buf, 4, u64::from(n));
}

/// Append a definite-length map header (major 5) declaring `n` pairs.
#[inline]
pub fn put_map_header(buf: &mut Vec<u8>, n: u32) {
    put_major(buf, 5, u64::from(n));
}

/// Append a tag (major 6). The caller follows with the tagged content item.
#[inline]
pub fn put_tag(buf: &mut Vec<u8>, tag: u64) {
    put_major(buf, 6, tag);
}

/// Append a boolean (major 7, simple 20/21).
#[inline]
pub fn put_bool(buf: &mut Vec<u8>, v: bool) {
    buf.push(if v { 0xf5 } else { 0xf4 });
}

/// Append null (major 7, simple 22).
#[inline]
pub fn put_null(buf: &mut Vec<u8>) {
    buf.push(0xf6);
}

/// Append undefined (major 7, simple 23).
#[inline]
pub fn put_undefined(buf: &mut Vec<u8>) {
    buf.push(0xf7);
}

/// Append a half-precision float (major 7, ai 25).
#[inline]
pub fn put_f16(buf: &mut Vec<u8>, v: f16) {
    buf.push(0xf9);
    buf.extend_from_slice(&v.to_be_bytes());
}

/// Append a single-precision float (major 7, ai 26).
#[inline]
pub fn put_f32(buf: &mut Vec<u8>, v: f32) {
    buf.push(0xfa);
    buf.extend_from_slice(&v.to_be_bytes());
}

/// Append a double-precision float (major 7, ai 27).
#[inline]
pub fn put_f64(buf: &mut Vec<u8>, v: f64) {
    buf.push(0xfb);
    buf.extend_from_slice(&v.to_be_bytes());
}

/// Append a float in the smallest width that represents it losslessly.
///
/// NaN shortens to the half-width quiet NaN. Use [`put_f64`] when a fixed
/// width is required.
pub fn put_f64_short(buf: &mut Vec<u8>, v: f64) {
    if v.is_nan() {
        put_f16(buf, f16::NAN);
        return;
    }
    let narrow = v as f32;
    if f64::from(narrow) == v {
        let half = f16::from_f32(narrow);
        if half.to_f32() == narrow {
            put_f16(buf, half);
        } else {
            put_f32(buf, narrow);
        }
    } else {
        put_f64(buf, v);
    }
}

/// Convert a container length to the header width, erroring on overflow.
///
/// Array and map headers declare their count as a `u32`; `at` is reported as
/// the error offset (typically the current buffer length).
///
/// # Errors
///
/// Returns `IntegerOverflow` when `len` exceeds `u32::MAX`.
#[inline]
pub fn check_len(len: usize, at: usize) -> Result<u32, CborError> {
    u32::try_from(len).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, at))
}
