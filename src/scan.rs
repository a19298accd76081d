//! One-pass well-formedness checking.
//!
//! [`well_formed_item`] confirms that a byte slice starts with one complete,
//! well-formed CBOR item and returns that item's encoded length without
//! materializing any value. Safe decoders run this once up front and then
//! re-parse structurally with a [`crate::TrustedReader`], so UTF-8 is
//! validated exactly once per document.

use crate::wire::{self, AI_INDEFINITE, BREAK};
use crate::{CborError, DecodeLimits, ErrorCode};

/// Check that `bytes` begin with one complete well-formed item and return its
/// encoded length.
///
/// Trailing bytes after the first item are not an error; the caller decides
/// what the remainder means.
///
/// # Errors
///
/// Returns the first truncation, ill-formedness, UTF-8, or limit violation
/// encountered.
pub fn well_formed_item(bytes: &[u8], limits: &DecodeLimits) -> Result<usize, CborError> {
    let mut s = Scanner::new(bytes, limits);
    s.skip_value(0)?;
    Ok(s.pos)
}

struct Scanner<'a, 'l> {
    data: &'a [u8],
    pos: usize,
    limits: &'l DecodeLimits,
    items_seen: usize,
}

impl<'a, 'l> Scanner<'a, 'l> {
    const fn new(data: &'a [u8], limits: &'l DecodeLimits) -> Self {
        Self {
            data,
            pos: 0,
            limits,
            items_seen: 0,
        }
    }

    fn read_u8(&mut self) -> Result<u8, CborError> {
        wire::read_u8(self.data, &mut self.pos)
    }

    fn read_len(
        &mut self,
        ai: u8,
        off: usize,
        max_len: usize,
    ) -> Result<usize, CborError> {
        let len = wire::read_uint(self.data, &mut self.pos, ai, off)?;
        let len = wire::len_to_usize(len, off)?;
        if len > max_len {
            return Err(CborError::new(ErrorCode::ContainerLimitExceeded, off));
        }
        Ok(len)
    }

    fn bump_items(&mut self, add: usize, off: usize) -> Result<(), CborError> {
        self.items_seen = self
            .items_seen
            .checked_add(add)
            .ok_or_else(|| CborError::new(ErrorCode::LengthOverflow, off))?;
        if self.items_seen > self.limits.max_total_items {
            return Err(CborError::new(ErrorCode::ItemsLimitExceeded, off));
        }
        Ok(())
    }

    const fn ensure_depth(&self, next_depth: usize, off: usize) -> Result<(), CborError> {
        if next_depth > self.limits.max_depth {
            return Err(CborError::new(ErrorCode::DepthLimitExceeded, off));
        }
        Ok(())
    }

    /// Peek for a break marker; `true` consumes it.
    fn take_break(&mut self, container_off: usize) -> Result<bool, CborError> {
        match self.data.get(self.pos) {
            Some(&BREAK) => {
                self.pos += 1;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(CborError::new(
                ErrorCode::UnterminatedIndefinite,
                container_off,
            )),
        }
    }

    /// Validate one definite chunk of an indefinite-length string.
    fn string_chunk(&mut self, major: u8) -> Result<(), CborError> {
        let off = self.pos;
        let ib = self.read_u8()?;
        if ib >> 5 != major || ib & 0x1f == AI_INDEFINITE {
            // Chunks must be definite strings of the enclosing major type.
            return Err(CborError::new(ErrorCode::UnterminatedIndefinite, off));
        }
        let max = if major == 2 {
            self.limits.max_bytes_len
        } else {
            self.limits.max_text_len
        };
        let len = self.read_len(ib & 0x1f, off, max)?;
        let payload = wire::read_exact(self.data, &mut self.pos, len)?;
        if major == 3 {
            crate::utf8::validate(payload)
                .map_err(|()| CborError::new(ErrorCode::Utf8Invalid, off))?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    fn skip_value(&mut self, depth: usize) -> Result<(), CborError> {
        let off = self.pos;
        let ib = self.read_u8()?;
        if ib == BREAK {
            return Err(CborError::new(ErrorCode::UnexpectedBreak, off));
        }
        self.bump_items(1, off)?;

        let major = ib >> 5;
        let ai = ib & 0x1f;

        debug_assert!(major <= 7);
        match major {
            0 | 1 => {
                let _ = wire::read_uint(self.data, &mut self.pos, ai, off)?;
                Ok(())
            }
            2 => {
                if ai == AI_INDEFINITE {
                    while !self.take_break(off)? {
                        self.string_chunk(2)?;
                    }
                    return Ok(());
                }
                let len = self.read_len(ai, off, self.limits.max_bytes_len)?;
                let _ = wire::read_exact(self.data, &mut self.pos, len)?;
                Ok(())
            }
            3 => {
                if ai == AI_INDEFINITE {
                    while !self.take_break(off)? {
                        self.string_chunk(3)?;
                    }
                    return Ok(());
                }
                let len = self.read_len(ai, off, self.limits.max_text_len)?;
                let payload = wire::read_exact(self.data, &mut self.pos, len)?;
                crate::utf8::validate(payload)
                    .map_err(|()| CborError::new(ErrorCode::Utf8Invalid, off))?;
                Ok(())
            }
            4 => {
                self.ensure_depth(depth + 1, off)?;
                if ai == AI_INDEFINITE {
                    while !self.take_break(off)? {
                        self.skip_value(depth + 1)?;
                    }
                    return Ok(());
                }
                let len = self.read_len(ai, off, self.limits.max_array_len)?;
                for _ in 0..len {
                    self.skip_value(depth + 1)?;
                }
                Ok(())
            }
            5 => {
                self.ensure_depth(depth + 1, off)?;
                if ai == AI_INDEFINITE {
                    // The break is only legal in key position.
                    while !self.take_break(off)? {
                        self.skip_value(depth + 1)?;
                        self.skip_value(depth + 1)?;
                    }
                    return Ok(());
                }
                let len = self.read_len(ai, off, self.limits.max_map_len)?;
                for _ in 0..len {
                    self.skip_value(depth + 1)?;
                    self.skip_value(depth + 1)?;
                }
                Ok(())
            }
            6 => {
                let _ = wire::read_uint(self.data, &mut self.pos, ai, off)?;
                self.ensure_depth(depth + 1, off)?;
                self.skip_value(depth + 1)
            }
            7 => match ai {
                0..=23 => Ok(()),
                24 => {
                    let simple = self.read_u8()?;
                    if simple < 32 {
                        return Err(CborError::new(ErrorCode::DisallowedSimpleValue, off));
                    }
                    Ok(())
                }
                25 => wire::read_be_u16(self.data, &mut self.pos).map(|_| ()),
                26 => wire::read_be_u32(self.data, &mut self.pos).map(|_| ()),
                27 => wire::read_be_u64(self.data, &mut self.pos).map(|_| ()),
                _ => Err(CborError::new(ErrorCode::ReservedAdditionalInfo, off)),
            },
            _ => unreachable!("major out of range"),
        }
    }
}
