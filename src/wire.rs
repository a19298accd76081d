use crate::{CborError, ErrorCode};

/// Initial byte of a break marker terminating an indefinite-length item.
pub(crate) const BREAK: u8 = 0xff;

/// Additional-info value announcing an indefinite length.
pub(crate) const AI_INDEFINITE: u8 = 31;

pub(crate) fn read_u8(data: &[u8], pos: &mut usize) -> Result<u8, CborError> {
    let off = *pos;
    let b = *data
        .get(*pos)
        .ok_or_else(|| CborError::new(ErrorCode::Truncated, off))?;
    *pos += 1;
    Ok(b)
}

pub(crate) fn read_exact<'a>(
    data: &'a [u8],
    pos: &mut usize,
    n: usize,
) -> Result<&'a [u8], CborError> {
    let off = *pos;
    let end = pos
        .checked_add(n)
        .ok_or_else(|| CborError::new(ErrorCode::LengthOverflow, off))?;
    if end > data.len() {
        return Err(CborError::new(ErrorCode::Truncated, off));
    }
    let s = &data[*pos..end];
    *pos = end;
    Ok(s)
}

pub(crate) fn read_be_u16(data: &[u8], pos: &mut usize) -> Result<u16, CborError> {
    let s = read_exact(data, pos, 2)?;
    Ok(u16::from_be_bytes([s[0], s[1]]))
}

pub(crate) fn read_be_u32(data: &[u8], pos: &mut usize) -> Result<u32, CborError> {
    let s = read_exact(data, pos, 4)?;
    Ok(u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
}

pub(crate) fn read_be_u64(data: &[u8], pos: &mut usize) -> Result<u64, CborError> {
    let s = read_exact(data, pos, 8)?;
    Ok(u64::from_be_bytes([
        s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7],
    ]))
}

/// Read the unsigned argument selected by additional-info `ai`.
///
/// Both minimal and non-minimal widths are accepted. Values 28..=31 are
/// rejected; callers that permit an indefinite length must test for
/// [`AI_INDEFINITE`] before calling this.
pub(crate) fn read_uint(
    data: &[u8],
    pos: &mut usize,
    ai: u8,
    off: usize,
) -> Result<u64, CborError> {
    match ai {
        0..=23 => Ok(u64::from(ai)),
        24 => Ok(u64::from(read_u8(data, pos)?)),
        25 => Ok(u64::from(read_be_u16(data, pos)?)),
        26 => Ok(u64::from(read_be_u32(data, pos)?)),
        27 => Ok(read_be_u64(data, pos)?),
        _ => Err(CborError::new(ErrorCode::ReservedAdditionalInfo, off)),
    }
}

pub(crate) fn len_to_usize(len: u64, off: usize) -> Result<usize, CborError> {
    usize::try_from(len).map_err(|_| CborError::new(ErrorCode::LengthOverflow, off))
}
