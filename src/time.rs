//! Tagged time and duration helpers.
//!
//! Times travel as tag 1 + integer epoch seconds on the emit side; the read
//! side also accepts tag 0 + RFC 3339 text and float epoch payloads.
//! Durations use tag 1000 wrapping the unsigned nanosecond count.

use core::time::Duration;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use crate::encode::{put_i64, put_tag, put_text, put_u64};
use crate::interop::{TAG_DURATION, TAG_EPOCH, TAG_RFC3339};
use crate::reader::Reader;
use crate::{CborError, ErrorCode};

/// Append a time as tag 1 + epoch seconds.
///
/// Sub-second precision is dropped; use [`put_time_rfc3339`] to keep it.
pub fn put_time_epoch(buf: &mut Vec<u8>, t: &DateTime<Utc>) {
    put_tag(buf, TAG_EPOCH);
    put_i64(buf, t.timestamp());
}

/// Append a time as tag 0 + RFC 3339 text.
pub fn put_time_rfc3339(buf: &mut Vec<u8>, t: &DateTime<Utc>) {
    put_tag(buf, TAG_RFC3339);
    put_text(buf, &t.to_rfc3339_opts(SecondsFormat::AutoSi, true));
}

/// Append a duration as tag 1000 + nanoseconds.
///
/// # Errors
///
/// Returns `IntegerOverflow` when the nanosecond count exceeds `u64::MAX`
/// (durations beyond roughly 584 years).
pub fn put_duration(buf: &mut Vec<u8>, d: &Duration) -> Result<(), CborError> {
    let nanos = u64::try_from(d.as_nanos())
        .map_err(|_| CborError::new(ErrorCode::IntegerOverflow, buf.len()))?;
    put_tag(buf, TAG_DURATION);
    put_u64(buf, nanos);
    Ok(())
}

impl<const SAFE: bool> Reader<'_, SAFE> {
    /// Read a tagged time (tag 0 RFC 3339 text, or tag 1 epoch seconds as
    /// integer or float).
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for other tags, `InvalidTime` for unrepresentable
    /// instants or unparseable text.
    pub fn time(&mut self) -> Result<DateTime<Utc>, CborError> {
        let off = self.position();
        let tag = self.tag()?;
        match tag {
            TAG_RFC3339 => {
                let s = self.str()?;
                DateTime::parse_from_rfc3339(s)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|_| CborError::new(ErrorCode::InvalidTime, off))
            }
            TAG_EPOCH => {
                if self.peek_float() {
                    let v = self.f64()?;
                    if !v.is_finite() {
                        return Err(CborError::new(ErrorCode::InvalidTime, off));
                    }
                    let secs = v.div_euclid(1.0) as i64;
                    let nanos = (v.rem_euclid(1.0) * 1_000_000_000.0) as u32;
                    Utc.timestamp_opt(secs, nanos)
                        .single()
                        .ok_or_else(|| CborError::new(ErrorCode::InvalidTime, off))
                } else {
                    let secs = self.i64()?;
                    Utc.timestamp_opt(secs, 0)
                        .single()
                        .ok_or_else(|| CborError::new(ErrorCode::InvalidTime, off))
                }
            }
            _ => Err(CborError::new(ErrorCode::TypeMismatch, off)),
        }
    }

    /// Read a tagged duration (tag 1000 + nanoseconds).
    ///
    /// # Errors
    ///
    /// `TypeMismatch` when the tag or payload kind differs.
    pub fn duration(&mut self) -> Result<Duration, CborError> {
        let off = self.position();
        let tag = self.tag()?;
        if tag != TAG_DURATION {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        let nanos = self.u64()?;
        Ok(Duration::from_nanos(nanos))
    }
}
