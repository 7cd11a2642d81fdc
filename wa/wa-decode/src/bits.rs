//! Sign extension and rotation on fixed-width words.

/// Sign-extend the low 8 bits of `val` into all 32 bits.
///
/// Only ORs in the high bits when the narrow sign bit is set; a value with a
/// clear sign bit is returned untouched.
#[inline]
pub fn sext_8_32(val: &mut u32) {
    if *val & 0x80 != 0 {
        *val |= 0xFFFF_FF00;
    }
}

#[inline]
pub fn sext_16_32(val: &mut u32) {
    if *val & 0x8000 != 0 {
        *val |= 0xFFFF_0000;
    }
}

#[inline]
pub fn sext_8_64(val: &mut u64) {
    if *val & 0x80 != 0 {
        *val |= 0xFFFF_FFFF_FFFF_FF00;
    }
}

#[inline]
pub fn sext_16_64(val: &mut u64) {
    if *val & 0x8000 != 0 {
        *val |= 0xFFFF_FFFF_FFFF_0000;
    }
}

#[inline]
pub fn sext_32_64(val: &mut u64) {
    if *val & 0x8000_0000 != 0 {
        *val |= 0xFFFF_FFFF_0000_0000;
    }
}

/// Rotate left; `c` is taken modulo 32.
#[inline]
pub fn rotl32(n: u32, c: u32) -> u32 {
    n.rotate_left(c % u32::BITS)
}

/// Rotate right; `c` is taken modulo 32.
#[inline]
pub fn rotr32(n: u32, c: u32) -> u32 {
    n.rotate_right(c % u32::BITS)
}

/// Rotate left; `c` is taken modulo 64.
#[inline]
pub fn rotl64(n: u64, c: u32) -> u64 {
    n.rotate_left(c % u64::BITS)
}

/// Rotate right; `c` is taken modulo 64.
#[inline]
pub fn rotr64(n: u64, c: u32) -> u64 {
    n.rotate_right(c % u64::BITS)
}
