//! ULEB128/SLEB128 decoding bounded by a declared bit width.
//!
//! A varint for a `max_bits`-wide value may carry at most `ceil(max_bits / 7)`
//! continuation bytes; one more is reported as [`DecodeError::Overflow`].
//! On any failure the cursor is left where it was.

use super::{cursor::Cursor, DecodeError, Result};

/// Width and signedness of an integer read via [`decode_integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::U8 | IntWidth::I8 => 8,
            IntWidth::U16 | IntWidth::I16 => 16,
            IntWidth::U32 | IntWidth::I32 => 32,
            IntWidth::U64 | IntWidth::I64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, IntWidth::I8 | IntWidth::I16 | IntWidth::I32 | IntWidth::I64)
    }
}

/// A width-tagged integer produced by [`decode_integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedInteger {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
}

impl DecodedInteger {
    pub fn width(&self) -> IntWidth {
        match self {
            DecodedInteger::U8(_) => IntWidth::U8,
            DecodedInteger::U16(_) => IntWidth::U16,
            DecodedInteger::U32(_) => IntWidth::U32,
            DecodedInteger::U64(_) => IntWidth::U64,
            DecodedInteger::I8(_) => IntWidth::I8,
            DecodedInteger::I16(_) => IntWidth::I16,
            DecodedInteger::I32(_) => IntWidth::I32,
            DecodedInteger::I64(_) => IntWidth::I64,
        }
    }

    /// Value widened to 64 bits (zero-extended if unsigned, sign-extended if signed).
    pub fn to_bits64(&self) -> u64 {
        match *self {
            DecodedInteger::U8(v) => v.into(),
            DecodedInteger::U16(v) => v.into(),
            DecodedInteger::U32(v) => v.into(),
            DecodedInteger::U64(v) => v,
            DecodedInteger::I8(v) => i64::from(v) as u64,
            DecodedInteger::I16(v) => i64::from(v) as u64,
            DecodedInteger::I32(v) => i64::from(v) as u64,
            DecodedInteger::I64(v) => v as u64,
        }
    }
}

/// Clamp a declared width into the range a u64 accumulator can represent.
#[inline]
fn clamp_bits(max_bits: u32) -> u32 {
    max_bits.clamp(1, 64)
}

/// Raw group accumulation shared by both variants.
/// Returns the accumulated value, the final shift, and the terminating byte.
fn decode_groups(cur: &mut Cursor, bits: u32) -> Result<(u64, u32, u8)> {
    let max_groups = (bits + 6) / 7; // ceiling(bits/7)
    let mut c = *cur;
    let start = c.offset();

    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut continuations: u32 = 0;
    loop {
        let byte = c.read_u8()?;
        // Groups past bit 63 cannot be represented and are dropped.
        result |= u64::from(byte & 0x7F).checked_shl(shift).unwrap_or(0);
        shift += 7;
        if byte & 0x80 == 0 {
            *cur = c;
            return Ok((result, shift, byte));
        }
        continuations += 1;
        if continuations > max_groups {
            return Err(DecodeError::Overflow {
                max_bits: bits,
                offset: start,
            });
        }
    }
}

/// Decode an unsigned LEB128 value bounded by `max_bits`.
pub fn decode_unsigned(cur: &mut Cursor, max_bits: u32) -> Result<u64> {
    decode_groups(cur, clamp_bits(max_bits)).map(|(v, _, _)| v)
}

/// Decode a signed LEB128 value bounded by `max_bits`.
pub fn decode_signed(cur: &mut Cursor, max_bits: u32) -> Result<i64> {
    let bits = clamp_bits(max_bits);
    let (mut result, shift, last) = decode_groups(cur, bits)?;
    if shift < bits && (last & 0x40) != 0 {
        result |= !0u64 << shift;
    }
    Ok(result as i64)
}

/// Slice/offset form of [`decode_unsigned`]: returns the value and the offset
/// of the first unread byte.
pub fn decode_unsigned_at(buf: &[u8], offset: usize, max_bits: u32) -> Result<(u64, usize)> {
    let mut cur = Cursor::at(buf, offset)?;
    let v = decode_unsigned(&mut cur, max_bits)?;
    Ok((v, cur.offset()))
}

/// Slice/offset form of [`decode_signed`].
pub fn decode_signed_at(buf: &[u8], offset: usize, max_bits: u32) -> Result<(i64, usize)> {
    let mut cur = Cursor::at(buf, offset)?;
    let v = decode_signed(&mut cur, max_bits)?;
    Ok((v, cur.offset()))
}

/// Decode an integer of the given width.
///
/// Unsigned values wider than the target type fail with `Overflow`; signed
/// values keep their low `width.bits()` bits as two's complement.
pub fn decode_integer(cur: &mut Cursor, width: IntWidth) -> Result<DecodedInteger> {
    let mut c = *cur;
    let start = c.offset();
    let overflow = || DecodeError::Overflow {
        max_bits: width.bits(),
        offset: start,
    };

    let value = if width.is_signed() {
        let v = decode_signed(&mut c, width.bits())?;
        match width {
            IntWidth::I8 => DecodedInteger::I8(v as i8),
            IntWidth::I16 => DecodedInteger::I16(v as i16),
            IntWidth::I32 => DecodedInteger::I32(v as i32),
            _ => DecodedInteger::I64(v),
        }
    } else {
        let v = decode_unsigned(&mut c, width.bits())?;
        match width {
            IntWidth::U8 => DecodedInteger::U8(u8::try_from(v).map_err(|_| overflow())?),
            IntWidth::U16 => DecodedInteger::U16(u16::try_from(v).map_err(|_| overflow())?),
            IntWidth::U32 => DecodedInteger::U32(u32::try_from(v).map_err(|_| overflow())?),
            _ => DecodedInteger::U64(v),
        }
    };
    *cur = c;
    Ok(value)
}

/// Decode an unsigned LEB128 as u32.
pub fn read_u32(cur: &mut Cursor) -> Result<u32> {
    let mut c = *cur;
    let start = c.offset();
    let v = u32::try_from(decode_unsigned(&mut c, 32)?).map_err(|_| DecodeError::Overflow {
        max_bits: 32,
        offset: start,
    })?;
    *cur = c;
    Ok(v)
}

/// Decode an unsigned LEB128 as u64.
pub fn read_u64(cur: &mut Cursor) -> Result<u64> {
    decode_unsigned(cur, 64)
}

/// Decode a signed LEB128 as i32.
pub fn read_i32(cur: &mut Cursor) -> Result<i32> {
    decode_signed(cur, 32).map(|v| v as i32)
}

/// Decode a signed LEB128 as i64.
pub fn read_i64(cur: &mut Cursor) -> Result<i64> {
    decode_signed(cur, 64)
}
