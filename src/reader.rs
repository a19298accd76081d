//! Read-side primitives.
//!
//! [`Reader`] is a cursor over a borrowed byte slice. The two safety modes are
//! separately monomorphized code paths selected by the `SAFE` const parameter,
//! not a runtime switch: [`SafeReader`] validates UTF-8 and enforces
//! [`DecodeLimits`]; [`TrustedReader`] does neither and may hand out text that
//! aliases the input buffer.
//!
//! Every read consumes exactly one item (or one header) and leaves the cursor
//! on a well-defined boundary; [`Reader::rest`] is the remainder.

use half::f16;

use crate::wire::{self, AI_INDEFINITE, BREAK};
use crate::{CborError, DecodeLimits, ErrorCode};

/// Cursor over CBOR bytes, parameterized by safety mode.
pub struct Reader<'de, const SAFE: bool> {
    pub(crate) data: &'de [u8],
    pub(crate) pos: usize,
    pub(crate) limits: DecodeLimits,
}

/// Reader that validates UTF-8 and enforces decode limits.
pub type SafeReader<'de> = Reader<'de, true>;
/// Reader that trusts the producer of its input: no UTF-8 validation, no
/// limit enforcement, and borrowed text aliases the input buffer.
pub type TrustedReader<'de> = Reader<'de, false>;

impl<'de, const SAFE: bool> Reader<'de, SAFE> {
    /// Construct a reader over `data` with default limits.
    #[must_use]
    pub fn new(data: &'de [u8]) -> Self {
        Self {
            data,
            pos: 0,
            limits: DecodeLimits::default(),
        }
    }

    /// Construct a reader with explicit limits (safe mode only consults them).
    #[must_use]
    pub const fn with_limits(data: &'de [u8], limits: DecodeLimits) -> Self {
        Self {
            data,
            pos: 0,
            limits,
        }
    }

    /// Current byte offset into the input.
    #[must_use]
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The unread remainder of the input.
    #[must_use]
    #[inline]
    pub fn rest(&self) -> &'de [u8] {
        &self.data[self.pos..]
    }

    /// Returns `true` when the input is fully consumed.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    #[inline]
    fn read_header(&mut self) -> Result<(u8, u8, usize), CborError> {
        let off = self.pos;
        let ib = wire::read_u8(self.data, &mut self.pos)?;
        Ok((ib >> 5, ib & 0x1f, off))
    }

    #[inline]
    fn read_uint_arg(&mut self, ai: u8, off: usize) -> Result<u64, CborError> {
        wire::read_uint(self.data, &mut self.pos, ai, off)
    }

    /// Read a definite length; indefinite headers are unsupported in typed
    /// reads.
    #[inline]
    fn read_len(&mut self, ai: u8, off: usize) -> Result<usize, CborError> {
        if ai == AI_INDEFINITE {
            return Err(CborError::new(ErrorCode::IndefiniteUnsupported, off));
        }
        let len = self.read_uint_arg(ai, off)?;
        wire::len_to_usize(len, off)
    }

    /// Read an unsigned integer (major 0).
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for any other major type; `Truncated` on short input.
    pub fn u64(&mut self) -> Result<u64, CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 0 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        self.read_uint_arg(ai, off)
    }

    /// Read a signed integer (major 0 or 1).
    ///
    /// # Errors
    ///
    /// `IntegerOverflow` when the wire value does not fit `i64`.
    pub fn i64(&mut self) -> Result<i64, CborError> {
        let (major, ai, off) = self.read_header()?;
        match major {
            0 => {
                let v = self.read_uint_arg(ai, off)?;
                i64::try_from(v).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, off))
            }
            1 => {
                let n = self.read_uint_arg(ai, off)?;
                let n = i64::try_from(n)
                    .map_err(|_| CborError::new(ErrorCode::IntegerOverflow, off))?;
                Ok(-1 - n)
            }
            _ => Err(CborError::new(ErrorCode::TypeMismatch, off)),
        }
    }

    /// Read an unsigned integer that must fit `u8`.
    ///
    /// # Errors
    ///
    /// `IntegerOverflow` when the value exceeds the target range.
    pub fn u8(&mut self) -> Result<u8, CborError> {
        let off = self.pos;
        let v = self.u64()?;
        u8::try_from(v).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, off))
    }

    /// Read an unsigned integer that must fit `u16`.
    ///
    /// # Errors
    ///
    /// `IntegerOverflow` when the value exceeds the target range.
    pub fn u16(&mut self) -> Result<u16, CborError> {
        let off = self.pos;
        let v = self.u64()?;
        u16::try_from(v).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, off))
    }

    /// Read an unsigned integer that must fit `u32`.
    ///
    /// # Errors
    ///
    /// `IntegerOverflow` when the value exceeds the target range.
    pub fn u32(&mut self) -> Result<u32, CborError> {
        let off = self.pos;
        let v = self.u64()?;
        u32::try_from(v).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, off))
    }

    /// Read a signed integer that must fit `i8`.
    ///
    /// # Errors
    ///
    /// `IntegerOverflow` when the value exceeds the target range.
    pub fn i8(&mut self) -> Result<i8, CborError> {
        let off = self.pos;
        let v = self.i64()?;
        i8::try_from(v).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, off))
    }

    /// Read a signed integer that must fit `i16`.
    ///
    /// # Errors
    ///
    /// `IntegerOverflow` when the value exceeds the target range.
    pub fn i16(&mut self) -> Result<i16, CborError> {
        let off = self.pos;
        let v = self.i64()?;
        i16::try_from(v).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, off))
    }

    /// Read a signed integer that must fit `i32`.
    ///
    /// # Errors
    ///
    /// `IntegerOverflow` when the value exceeds the target range.
    pub fn i32(&mut self) -> Result<i32, CborError> {
        let off = self.pos;
        let v = self.i64()?;
        i32::try_from(v).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, off))
    }

    /// Read a definite-length byte string (major 2), borrowed from the input.
    ///
    /// # Errors
    ///
    /// `TypeMismatch`, `IndefiniteUnsupported`, limit errors (safe mode), or
    /// `Truncated`.
    pub fn bytes(&mut self) -> Result<&'de [u8], CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 2 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        let len = self.read_len(ai, off)?;
        if SAFE && len > self.limits.max_bytes_len {
            return Err(CborError::new(ErrorCode::ContainerLimitExceeded, off));
        }
        wire::read_exact(self.data, &mut self.pos, len)
    }

    /// Read a definite-length text string (major 3), borrowed from the input.
    ///
    /// Safe mode validates UTF-8; trusted mode does not and relies on the
    /// caller's guarantee that the producer emitted valid text.
    ///
    /// # Errors
    ///
    /// `TypeMismatch`, `Utf8Invalid` (safe mode), limit errors (safe mode), or
    /// `Truncated`.
    pub fn str(&mut self) -> Result<&'de str, CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 3 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        let len = self.read_len(ai, off)?;
        if SAFE && len > self.limits.max_text_len {
            return Err(CborError::new(ErrorCode::ContainerLimitExceeded, off));
        }
        let payload = wire::read_exact(self.data, &mut self.pos, len)?;
        if SAFE {
            crate::utf8::validate(payload).map_err(|()| CborError::new(ErrorCode::Utf8Invalid, off))
        } else {
            Ok(crate::utf8::trusted(payload))
        }
    }

    /// Read a definite-length array header (major 4), returning the declared
    /// item count. The caller follows with that many item reads.
    ///
    /// # Errors
    ///
    /// `TypeMismatch`, `IndefiniteUnsupported`, or limit errors (safe mode).
    pub fn array_header(&mut self) -> Result<usize, CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 4 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        let len = self.read_len(ai, off)?;
        if SAFE && len > self.limits.max_array_len {
            return Err(CborError::new(ErrorCode::ContainerLimitExceeded, off));
        }
        Ok(len)
    }

    /// Read a definite-length map header (major 5), returning the declared
    /// pair count. The caller follows with `2 * n` item reads.
    ///
    /// # Errors
    ///
    /// `TypeMismatch`, `IndefiniteUnsupported`, or limit errors (safe mode).
    pub fn map_header(&mut self) -> Result<usize, CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 5 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        let len = self.read_len(ai, off)?;
        if SAFE && len > self.limits.max_map_len {
            return Err(CborError::new(ErrorCode::ContainerLimitExceeded, off));
        }
        Ok(len)
    }

    /// Read a tag number (major 6). The caller follows with the tagged
    /// content item.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for any other major type.
    pub fn tag(&mut self) -> Result<u64, CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 6 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        self.read_uint_arg(ai, off)
    }

    /// Read a boolean (simple 20/21).
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for anything else.
    pub fn bool(&mut self) -> Result<bool, CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 7 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        match ai {
            20 => Ok(false),
            21 => Ok(true),
            _ => Err(CborError::new(ErrorCode::TypeMismatch, off)),
        }
    }

    /// Read a null (simple 22).
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for anything else.
    pub fn null(&mut self) -> Result<(), CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 7 || ai != 22 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        Ok(())
    }

    /// Read an undefined (simple 23).
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for anything else.
    pub fn undefined(&mut self) -> Result<(), CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 7 || ai != 23 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        Ok(())
    }

    /// Returns `true` when the next item is null, without consuming it.
    #[must_use]
    #[inline]
    pub fn peek_null(&self) -> bool {
        self.data.get(self.pos) == Some(&0xf6)
    }

    /// Returns `true` when the next item is a float of any width.
    #[inline]
    pub(crate) fn peek_float(&self) -> bool {
        matches!(self.data.get(self.pos), Some(&b) if (0xf9..=0xfb).contains(&b))
    }

    /// Read a float of any width (ai 25/26/27) and widen to `f64`.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for non-float items.
    pub fn f64(&mut self) -> Result<f64, CborError> {
        let (major, ai, off) = self.read_header()?;
        if major != 7 {
            return Err(CborError::new(ErrorCode::TypeMismatch, off));
        }
        match ai {
            25 => {
                let bits = wire::read_be_u16(self.data, &mut self.pos)?;
                Ok(f16::from_bits(bits).to_f64())
            }
            26 => {
                let bits = wire::read_be_u32(self.data, &mut self.pos)?;
                Ok(f64::from(f32::from_bits(bits)))
            }
            27 => {
                let bits = wire::read_be_u64(self.data, &mut self.pos)?;
                Ok(f64::from_bits(bits))
            }
            _ => Err(CborError::new(ErrorCode::TypeMismatch, off)),
        }
    }

    /// Skip one complete item of any kind, including indefinite-length items.
    ///
    /// The walk is iterative with an explicit pending-count stack; in safe
    /// mode the stack depth is bounded by the configured depth limit.
    ///
    /// # Errors
    ///
    /// Any well-formedness error encountered while walking the item.
    pub fn skip_item(&mut self) -> Result<(), CborError> {
        let mut stack: Vec<Pending> = Vec::new();
        let mut pending = Pending::Count(1);

        loop {
            while pending == Pending::Count(0) {
                match stack.pop() {
                    Some(p) => pending = p,
                    None => return Ok(()),
                }
            }

            let off = self.pos;
            let ib = wire::read_u8(self.data, &mut self.pos)?;
            if ib == BREAK {
                if pending != Pending::UntilBreak {
                    return Err(CborError::new(ErrorCode::UnexpectedBreak, off));
                }
                pending = Pending::Count(0);
                continue;
            }
            if let Pending::Count(n) = &mut pending {
                *n -= 1;
            }

            let major = ib >> 5;
            let ai = ib & 0x1f;

            match major {
                0 | 1 => {
                    let _ = self.read_uint_arg(ai, off)?;
                }
                2 | 3 => {
                    if ai == AI_INDEFINITE {
                        // Chunks must be definite strings of the same major
                        // type; walk them inline up to the break.
                        loop {
                            let c_off = self.pos;
                            let cb = wire::read_u8(self.data, &mut self.pos)?;
                            if cb == BREAK {
                                break;
                            }
                            if cb >> 5 != major || cb & 0x1f == AI_INDEFINITE {
                                return Err(CborError::new(
                                    ErrorCode::UnterminatedIndefinite,
                                    c_off,
                                ));
                            }
                            let len = self.read_len(cb & 0x1f, c_off)?;
                            let _ = wire::read_exact(self.data, &mut self.pos, len)?;
                        }
                    } else {
                        let len = self.read_len(ai, off)?;
                        let _ = wire::read_exact(self.data, &mut self.pos, len)?;
                    }
                }
                4 => {
                    stack.push(pending);
                    pending = if ai == AI_INDEFINITE {
                        Pending::UntilBreak
                    } else {
                        Pending::Count(self.read_len(ai, off)?)
                    };
                }
                5 => {
                    stack.push(pending);
                    pending = if ai == AI_INDEFINITE {
                        Pending::UntilBreak
                    } else {
                        let len = self.read_len(ai, off)?;
                        let items = len
                            .checked_mul(2)
                            .ok_or_else(|| CborError::new(ErrorCode::LengthOverflow, off))?;
                        Pending::Count(items)
                    };
                }
                6 => {
                    let _ = self.read_uint_arg(ai, off)?;
                    stack.push(pending);
                    pending = Pending::Count(1);
                }
                7 => match ai {
                    0..=23 => {}
                    24 => {
                        let simple = wire::read_u8(self.data, &mut self.pos)?;
                        if simple < 32 {
                            return Err(CborError::new(ErrorCode::DisallowedSimpleValue, off));
                        }
                    }
                    25 => {
                        let _ = wire::read_be_u16(self.data, &mut self.pos)?;
                    }
                    26 => {
                        let _ = wire::read_be_u32(self.data, &mut self.pos)?;
                    }
                    27 => {
                        let _ = wire::read_be_u64(self.data, &mut self.pos)?;
                    }
                    _ => return Err(CborError::new(ErrorCode::ReservedAdditionalInfo, off)),
                },
                _ => unreachable!("major out of range"),
            }

            if SAFE && stack.len() > self.limits.max_depth {
                return Err(CborError::new(ErrorCode::DepthLimitExceeded, off));
            }
        }
    }
}

/// Remaining child items at one nesting level of a skip walk.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Pending {
    Count(usize),
    UntilBreak,
}
