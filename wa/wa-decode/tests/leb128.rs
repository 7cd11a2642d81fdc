#![allow(unused_doc_comments)]
use proptest::prelude::*;
use wa_decode::binary::leb128::{decode_signed, decode_unsigned};
use wa_decode::{decode_signed_at, decode_unsigned_at, Cursor, DecodeError, ErrorKind};

fn encode_unsigned(mut v: u64) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

fn encode_signed(mut v: i64) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (v & 0x7F) as u8;
        v >>= 7;
        let done = (v == 0 && byte & 0x40 == 0) || (v == -1 && byte & 0x40 != 0);
        if done {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

fn low_bits(v: u64, bits: u32) -> u64 {
    if bits >= 64 {
        v
    } else {
        v & ((1u64 << bits) - 1)
    }
}

// Golden: the classic 624485 example.
#[test]
fn golden_uleb_624485() {
    assert_eq!(decode_unsigned_at(&[0xE5, 0x8E, 0x26], 0, 32), Ok((624485, 3)));
}

// Golden: single-byte SLEB128 with bit 6 set is negative.
#[test]
fn golden_sleb_minus_one() {
    assert_eq!(decode_signed_at(&[0x7F], 0, 8), Ok((-1, 1)));
}

// Golden: decoding resumes from a non-zero offset and stops at the terminator.
#[test]
fn golden_offset_protocol() {
    let buf = [0xAA, 0xAA, 0x80, 0x01, 0x05];
    let (v, next) = decode_unsigned_at(&buf, 2, 16).unwrap();
    assert_eq!((v, next), (128, 4));
    let (v, next) = decode_unsigned_at(&buf, next, 16).unwrap();
    assert_eq!((v, next), (5, 5));
    assert_eq!(
        decode_unsigned_at(&buf, next, 16).unwrap_err().kind(),
        ErrorKind::Truncated
    );
    assert_eq!(decode_unsigned_at(&buf, 9, 16).unwrap_err().kind(), ErrorKind::Truncated);
}

// Property: unsigned values that fit max_bits decode back with the encoded length.
proptest! {
    #[test]
    fn prop_unsigned_fits(raw in any::<u64>(), max_bits in 1u32..=64) {
        let v = low_bits(raw, max_bits);
        let bytes = encode_unsigned(v);
        prop_assert_eq!(decode_unsigned_at(&bytes, 0, max_bits), Ok((v, bytes.len())));
    }
}

// Property: signed values agree with the input on their low max_bits bits.
proptest! {
    #[test]
    fn prop_signed_low_bits(raw in any::<i64>(), max_bits in 1u32..=64) {
        let shift = 64 - max_bits;
        let v = (raw << shift) >> shift; // sign-extend from max_bits
        let bytes = encode_signed(v);
        let mut c = Cursor::new(&bytes);
        let got = decode_signed(&mut c, max_bits).unwrap();
        prop_assert_eq!(c.offset(), bytes.len());
        prop_assert_eq!(low_bits(got as u64, max_bits), low_bits(v as u64, max_bits));
        if (bytes.len() as u32) * 7 < max_bits {
            prop_assert_eq!(got, v);
        }
    }
}

// Property: Overflow exactly when continuation bytes exceed ceil(max_bits / 7).
proptest! {
    #[test]
    fn prop_overflow_iff_too_many_continuations(k in 0usize..14, max_bits in 1u32..=64) {
        let mut bytes = vec![0x80u8; k];
        bytes.push(0x00);
        let limit = max_bits.div_ceil(7) as usize;
        let mut c = Cursor::new(&bytes);
        match decode_unsigned(&mut c, max_bits) {
            Ok(v) => {
                prop_assert!(k <= limit);
                prop_assert_eq!(v, 0);
                prop_assert_eq!(c.offset(), k + 1);
            }
            Err(e) => {
                prop_assert!(k > limit);
                prop_assert_eq!(e, DecodeError::Overflow { max_bits, offset: 0 });
                prop_assert_eq!(c.offset(), 0);
            }
        }
    }
}

// Property: cutting an encoding short is always Truncated, never Overflow.
proptest! {
    #[test]
    fn prop_truncated_prefix(raw in 128u64.., cut in 1usize..10) {
        let bytes = encode_unsigned(raw);
        let cut = cut.min(bytes.len() - 1);
        let err = decode_unsigned_at(&bytes[..cut], 0, 64).unwrap_err();
        let is_truncated = matches!(err, DecodeError::Truncated { .. });
        prop_assert!(is_truncated);
    }
}
