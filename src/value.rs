//! Dynamic value tree and the fallback walker.
//!
//! This is the codec's substitute for reflection: a [`Value`] tree that any
//! well-formed document can be read into, and that dynamic callers (including
//! the JSON interop layer) can build and emit. Generated code never goes
//! through this layer; the generator's tests enforce that boundary.

use std::collections::BTreeMap;

use crate::encode::{
    check_len, put_array_header, put_bool, put_bytes, put_f64, put_map_header, put_neg_u64,
    put_null, put_tag, put_text, put_u64, put_undefined,
};
use crate::wire::{self, AI_INDEFINITE, BREAK};
use crate::{CborError, DecodeLimits, ErrorCode};

/// A single CBOR item of any kind, owned.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Major 0.
    Unsigned(u64),
    /// Major 1, storing `n` for the value `-1 - n`.
    Negative(u64),
    /// Major 2.
    Bytes(Vec<u8>),
    /// Major 3.
    Text(String),
    /// Major 4.
    Array(Vec<Value>),
    /// Major 5, entries in insertion order.
    Map(Vec<(Value, Value)>),
    /// Major 6.
    Tag(u64, Box<Value>),
    /// Simple 20/21.
    Bool(bool),
    /// Simple 22.
    Null,
    /// Simple 23.
    Undefined,
    /// Major 7, ai 25/26/27, widened.
    Float(f64),
}

/// Append a dynamic value.
///
/// Emission is definite-length and minimal-width regardless of how the value
/// was originally decoded.
///
/// # Errors
///
/// Returns `IntegerOverflow` when a container exceeds the header range.
pub fn put_value(buf: &mut Vec<u8>, v: &Value) -> Result<(), CborError> {
    match v {
        Value::Unsigned(u) => put_u64(buf, *u),
        Value::Negative(n) => put_neg_u64(buf, *n),
        Value::Bytes(b) => put_bytes(buf, b),
        Value::Text(s) => put_text(buf, s),
        Value::Array(items) => {
            let n = check_len(items.len(), buf.len())?;
            put_array_header(buf, n);
            for item in items {
                put_value(buf, item)?;
            }
        }
        Value::Map(entries) => {
            let n = check_len(entries.len(), buf.len())?;
            put_map_header(buf, n);
            for (k, val) in entries {
                put_value(buf, k)?;
                put_value(buf, val)?;
            }
        }
        Value::Tag(tag, inner) => {
            put_tag(buf, *tag);
            put_value(buf, inner)?;
        }
        Value::Bool(b) => put_bool(buf, *b),
        Value::Null => put_null(buf),
        Value::Undefined => put_undefined(buf),
        Value::Float(f) => put_f64(buf, *f),
    }
    Ok(())
}

/// Read one item into a dynamic value, returning it with the remainder.
///
/// This path always validates (safe mode) and, unlike the typed read surface,
/// materializes indefinite-length strings, arrays, and maps.
///
/// # Errors
///
/// Returns the first well-formedness, UTF-8, or limit violation encountered.
pub fn read_value<'a>(
    bytes: &'a [u8],
    limits: &DecodeLimits,
) -> Result<(Value, &'a [u8]), CborError> {
    let mut p = ValueParser {
        data: bytes,
        pos: 0,
        limits,
    };
    let v = p.parse(0)?;
    Ok((v, &bytes[p.pos..]))
}

struct ValueParser<'a, 'l> {
    data: &'a [u8],
    pos: usize,
    limits: &'l DecodeLimits,
}

impl ValueParser<'_, '_> {
    fn read_u8(&mut self) -> Result<u8, CborError> {
        wire::read_u8(self.data, &mut self.pos)
    }

    fn read_len(&mut self, ai: u8, off: usize, max_len: usize) -> Result<usize, CborError> {
        let len = wire::read_uint(self.data, &mut self.pos, ai, off)?;
        let len = wire::len_to_usize(len, off)?;
        if len > max_len {
            return Err(CborError::new(ErrorCode::ContainerLimitExceeded, off));
        }
        Ok(len)
    }

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

    /// Collect one definite chunk of an indefinite-length string.
    fn string_chunk(&mut self, major: u8, out: &mut Vec<u8>) -> Result<(), CborError> {
        let off = self.pos;
        let ib = self.read_u8()?;
        if ib >> 5 != major || ib & 0x1f == AI_INDEFINITE {
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
        out.extend_from_slice(payload);
        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    fn parse(&mut self, depth: usize) -> Result<Value, CborError> {
        let off = self.pos;
        let ib = self.read_u8()?;
        if ib == BREAK {
            return Err(CborError::new(ErrorCode::UnexpectedBreak, off));
        }

        let major = ib >> 5;
        let ai = ib & 0x1f;

        match major {
            0 => Ok(Value::Unsigned(wire::read_uint(
                self.data, &mut self.pos, ai, off,
            )?)),
            1 => Ok(Value::Negative(wire::read_uint(
                self.data, &mut self.pos, ai, off,
            )?)),
            2 => {
                if ai == AI_INDEFINITE {
                    let mut out = Vec::new();
                    while !self.take_break(off)? {
                        self.string_chunk(2, &mut out)?;
                    }
                    return Ok(Value::Bytes(out));
                }
                let len = self.read_len(ai, off, self.limits.max_bytes_len)?;
                let b = wire::read_exact(self.data, &mut self.pos, len)?;
                Ok(Value::Bytes(b.to_vec()))
            }
            3 => {
                if ai == AI_INDEFINITE {
                    let mut out = Vec::new();
                    while !self.take_break(off)? {
                        self.string_chunk(3, &mut out)?;
                    }
                    // Chunks were validated individually and UTF-8 boundaries
                    // may not span chunks, so the concatenation is valid.
                    return Ok(Value::Text(crate::utf8::trusted(&out).to_owned()));
                }
                let len = self.read_len(ai, off, self.limits.max_text_len)?;
                let payload = wire::read_exact(self.data, &mut self.pos, len)?;
                let s = crate::utf8::validate(payload)
                    .map_err(|()| CborError::new(ErrorCode::Utf8Invalid, off))?;
                Ok(Value::Text(s.to_owned()))
            }
            4 => {
                if depth + 1 > self.limits.max_depth {
                    return Err(CborError::new(ErrorCode::DepthLimitExceeded, off));
                }
                if ai == AI_INDEFINITE {
                    let mut items = Vec::new();
                    while !self.take_break(off)? {
                        items.push(self.parse(depth + 1)?);
                    }
                    return Ok(Value::Array(items));
                }
                let len = self.read_len(ai, off, self.limits.max_array_len)?;
                let mut items = Vec::with_capacity(len.min(64));
                for _ in 0..len {
                    items.push(self.parse(depth + 1)?);
                }
                Ok(Value::Array(items))
            }
            5 => {
                if depth + 1 > self.limits.max_depth {
                    return Err(CborError::new(ErrorCode::DepthLimitExceeded, off));
                }
                if ai == AI_INDEFINITE {
                    let mut entries = Vec::new();
                    while !self.take_break(off)? {
                        let k = self.parse(depth + 1)?;
                        let v = self.parse(depth + 1)?;
                        entries.push((k, v));
                    }
                    return Ok(Value::Map(entries));
                }
                let len = self.read_len(ai, off, self.limits.max_map_len)?;
                let mut entries = Vec::with_capacity(len.min(64));
                for _ in 0..len {
                    let k = self.parse(depth + 1)?;
                    let v = self.parse(depth + 1)?;
                    entries.push((k, v));
                }
                Ok(Value::Map(entries))
            }
            6 => {
                let tag = wire::read_uint(self.data, &mut self.pos, ai, off)?;
                if depth + 1 > self.limits.max_depth {
                    return Err(CborError::new(ErrorCode::DepthLimitExceeded, off));
                }
                let inner = self.parse(depth + 1)?;
                Ok(Value::Tag(tag, Box::new(inner)))
            }
            7 => match ai {
                20 => Ok(Value::Bool(false)),
                21 => Ok(Value::Bool(true)),
                22 => Ok(Value::Null),
                23 => Ok(Value::Undefined),
                // Unassigned simple values are well-formed but have no
                // dynamic representation.
                0..=19 => Err(CborError::new(ErrorCode::TypeMismatch, off)),
                24 => {
                    let simple = self.read_u8()?;
                    if simple < 32 {
                        return Err(CborError::new(ErrorCode::DisallowedSimpleValue, off));
                    }
                    Err(CborError::new(ErrorCode::TypeMismatch, off))
                }
                25 => {
                    let bits = wire::read_be_u16(self.data, &mut self.pos)?;
                    Ok(Value::Float(half::f16::from_bits(bits).to_f64()))
                }
                26 => {
                    let bits = wire::read_be_u32(self.data, &mut self.pos)?;
                    Ok(Value::Float(f64::from(f32::from_bits(bits))))
                }
                27 => {
                    let bits = wire::read_be_u64(self.data, &mut self.pos)?;
                    Ok(Value::Float(f64::from_bits(bits)))
                }
                _ => Err(CborError::new(ErrorCode::ReservedAdditionalInfo, off)),
            },
            _ => unreachable!("major out of range"),
        }
    }
}

/// Conversion between a user type and the dynamic [`Value`] tree.
///
/// This is the hook behind [`put_dynamic`] / [`read_dynamic`], the fallback
/// path for shapes the generator does not specialize. Generated code for
/// recognized shapes never uses it.
pub trait DynamicCbor: Sized {
    /// Build the dynamic representation of `self`.
    fn to_value(&self) -> Value;

    /// Rebuild `Self` from a dynamic value.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` (or `IntegerOverflow`) when the value tree does
    /// not have the expected shape.
    fn from_value(v: &Value) -> Result<Self, CborError>;
}

impl<const SAFE: bool> crate::Reader<'_, SAFE> {
    /// Read the next item through the dynamic tree into any [`DynamicCbor`]
    /// type, advancing the cursor past it.
    ///
    /// This is the decode half of the fallback path; it always validates.
    ///
    /// # Errors
    ///
    /// Propagates [`read_value`] and conversion errors.
    pub fn dynamic<T: DynamicCbor>(&mut self) -> Result<T, CborError> {
        let mut p = ValueParser {
            data: self.data,
            pos: self.pos,
            limits: &self.limits,
        };
        let v = p.parse(0)?;
        self.pos = p.pos;
        T::from_value(&v)
    }
}

/// Append any [`DynamicCbor`] value through the dynamic tree.
///
/// # Errors
///
/// Propagates [`put_value`] errors.
pub fn put_dynamic<T: DynamicCbor>(buf: &mut Vec<u8>, v: &T) -> Result<(), CborError> {
    put_value(buf, &v.to_value())
}

/// Read any [`DynamicCbor`] value through the dynamic tree, returning the
/// remainder.
///
/// # Errors
///
/// Propagates [`read_value`] and conversion errors.
pub fn read_dynamic<'a, T: DynamicCbor>(
    bytes: &'a [u8],
    limits: &DecodeLimits,
) -> Result<(T, &'a [u8]), CborError> {
    let (v, rest) = read_value(bytes, limits)?;
    Ok((T::from_value(&v)?, rest))
}

fn mismatch() -> CborError {
    CborError::new(ErrorCode::TypeMismatch, 0)
}

impl DynamicCbor for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        match v {
            Value::Bool(b) => Ok(*b),
            _ => Err(mismatch()),
        }
    }
}

impl DynamicCbor for u64 {
    fn to_value(&self) -> Value {
        Value::Unsigned(*self)
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        match v {
            Value::Unsigned(u) => Ok(*u),
            _ => Err(mismatch()),
        }
    }
}

impl DynamicCbor for u32 {
    fn to_value(&self) -> Value {
        Value::Unsigned(u64::from(*self))
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        match v {
            Value::Unsigned(u) => {
                Self::try_from(*u).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, 0))
            }
            _ => Err(mismatch()),
        }
    }
}

impl DynamicCbor for i64 {
    fn to_value(&self) -> Value {
        if *self >= 0 {
            Value::Unsigned(*self as u64)
        } else {
            Value::Negative(!(*self as u64))
        }
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        let overflow = || CborError::new(ErrorCode::IntegerOverflow, 0);
        match v {
            Value::Unsigned(u) => Self::try_from(*u).map_err(|_| overflow()),
            Value::Negative(n) => {
                let n = Self::try_from(*n).map_err(|_| overflow())?;
                Ok(-1 - n)
            }
            _ => Err(mismatch()),
        }
    }
}

impl DynamicCbor for i32 {
    fn to_value(&self) -> Value {
        i64::from(*self).to_value()
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        let wide = i64::from_value(v)?;
        Self::try_from(wide).map_err(|_| CborError::new(ErrorCode::IntegerOverflow, 0))
    }
}

impl DynamicCbor for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        match v {
            Value::Float(f) => Ok(*f),
            _ => Err(mismatch()),
        }
    }
}

impl DynamicCbor for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        match v {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(mismatch()),
        }
    }
}

impl<T: DynamicCbor> DynamicCbor for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(DynamicCbor::to_value).collect())
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        match v {
            Value::Array(items) => items.iter().map(T::from_value).collect(),
            _ => Err(mismatch()),
        }
    }
}

impl<T: DynamicCbor> DynamicCbor for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, DynamicCbor::to_value)
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        match v {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: DynamicCbor> DynamicCbor for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (Value::Text(k.clone()), v.to_value()))
                .collect(),
        )
    }

    fn from_value(v: &Value) -> Result<Self, CborError> {
        match v {
            Value::Map(entries) => {
                let mut out = Self::new();
                for (k, val) in entries {
                    let Value::Text(key) = k else {
                        return Err(mismatch());
                    };
                    out.insert(key.clone(), T::from_value(val)?);
                }
                Ok(out)
            }
            _ => Err(mismatch()),
        }
    }
}
