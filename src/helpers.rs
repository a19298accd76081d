//! Composite helpers over the primitive surface.
//!
//! These cover the container shapes every generated routine uses: text
//! arrays, string-to-string maps, and option-like pointers. Read-side mirrors
//! return owned values; the remainder is whatever the reader has not
//! consumed.

use std::collections::BTreeMap;

use crate::encode::{check_len, put_array_header, put_map_header, put_null, put_text};
use crate::reader::Reader;
use crate::CborError;

/// Append an array of text strings.
///
/// # Errors
///
/// Returns `IntegerOverflow` when the item count exceeds the header range.
pub fn put_text_array<S: AsRef<str>>(buf: &mut Vec<u8>, items: &[S]) -> Result<(), CborError> {
    let n = check_len(items.len(), buf.len())?;
    put_array_header(buf, n);
    for s in items {
        put_text(buf, s.as_ref());
    }
    Ok(())
}

/// Append a string-to-string map from an iterator with a known entry count.
///
/// Entries are emitted in iteration order; nothing is sorted or deduplicated.
///
/// # Errors
///
/// Returns `IntegerOverflow` when the entry count exceeds the header range.
pub fn put_text_map<'e, I>(buf: &mut Vec<u8>, len: usize, entries: I) -> Result<(), CborError>
where
    I: IntoIterator<Item = (&'e str, &'e str)>,
{
    let n = check_len(len, buf.len())?;
    put_map_header(buf, n);
    for (k, v) in entries {
        put_text(buf, k);
        put_text(buf, v);
    }
    Ok(())
}

/// Append an option-like value: null when absent, otherwise whatever `f`
/// appends for the referent.
///
/// # Errors
///
/// Propagates the referent's marshal error.
pub fn put_option<T, F>(buf: &mut Vec<u8>, opt: Option<&T>, f: F) -> Result<(), CborError>
where
    F: FnOnce(&T, &mut Vec<u8>) -> Result<(), CborError>,
{
    match opt {
        Some(v) => f(v, buf),
        None => {
            put_null(buf);
            Ok(())
        }
    }
}

/// Read an array of text strings into owned values.
///
/// # Errors
///
/// Propagates header and element read errors.
pub fn read_text_array<const SAFE: bool>(
    r: &mut Reader<'_, SAFE>,
) -> Result<Vec<String>, CborError> {
    let n = r.array_header()?;
    let mut out = Vec::with_capacity(n.min(64));
    for _ in 0..n {
        out.push(r.str()?.to_owned());
    }
    Ok(out)
}

/// Read a string-to-string map into owned entries (last duplicate wins).
///
/// # Errors
///
/// Propagates header and entry read errors.
pub fn read_text_map<const SAFE: bool>(
    r: &mut Reader<'_, SAFE>,
) -> Result<BTreeMap<String, String>, CborError> {
    let n = r.map_header()?;
    let mut out = BTreeMap::new();
    for _ in 0..n {
        let k = r.str()?.to_owned();
        let v = r.str()?.to_owned();
        out.insert(k, v);
    }
    Ok(out)
}
