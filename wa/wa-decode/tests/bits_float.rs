#![allow(unused_doc_comments)]
use proptest::prelude::*;
use wa_decode::bits::*;
use wa_decode::float::{fmax, fmin};

// Golden: rotation by zero and by the full width is the identity.
#[test]
fn golden_rotation_edges() {
    assert_eq!(rotl32(1, 1), 2);
    for n in [0u32, 1, 0x8000_0000, 0xCAFE_BABE] {
        assert_eq!(rotl32(n, 32), n);
        assert_eq!(rotr32(n, 0), n);
        assert_eq!(rotl64(u64::from(n) << 7, 64), u64::from(n) << 7);
    }
}

// Golden: the IEEE-754 corner cases.
#[test]
fn golden_float_corners() {
    assert!(fmin(f64::NAN, 1.0).is_nan());
    let hi = fmax(0.0, -0.0);
    assert!(hi == 0.0 && hi.is_sign_positive());
    let lo = fmin(0.0, -0.0);
    assert!(lo == 0.0 && lo.is_sign_negative());
}

// Property: rotating right undoes rotating left, for any shift amount.
proptest! {
    #[test]
    fn prop_rotation_inverse(n in any::<u64>(), c in any::<u32>()) {
        prop_assert_eq!(rotr64(rotl64(n, c), c), n);
        let m = n as u32;
        prop_assert_eq!(rotl32(rotr32(m, c), c), m);
        prop_assert_eq!(rotl32(m, c), rotl32(m, c % 32));
    }
}

// Property: sign extension of a clean narrow value matches a signed cast.
proptest! {
    #[test]
    fn prop_sext_matches_cast(b in any::<u8>(), h in any::<u16>(), w in any::<u32>()) {
        let mut v = u32::from(b);
        sext_8_32(&mut v);
        prop_assert_eq!(v as i32, i32::from(b as i8));

        let mut v = u32::from(h);
        sext_16_32(&mut v);
        prop_assert_eq!(v as i32, i32::from(h as i16));

        let mut v = u64::from(b);
        sext_8_64(&mut v);
        prop_assert_eq!(v as i64, i64::from(b as i8));

        let mut v = u64::from(h);
        sext_16_64(&mut v);
        prop_assert_eq!(v as i64, i64::from(h as i16));

        let mut v = u64::from(w);
        sext_32_64(&mut v);
        prop_assert_eq!(v as i64, i64::from(w as i32));
    }
}

// Property: away from NaN and zero ties, fmax/fmin agree with the ordering.
proptest! {
    #[test]
    fn prop_float_order(a in any::<f64>(), b in any::<f64>()) {
        let hi = fmax(a, b);
        let lo = fmin(a, b);
        if a.is_nan() || b.is_nan() {
            prop_assert!(hi.is_nan() && lo.is_nan());
        } else {
            prop_assert!(hi >= a && hi >= b);
            prop_assert!(lo <= a && lo <= b);
            prop_assert!(hi == a || hi == b);
            prop_assert!(lo == a || lo == b);
            prop_assert_eq!(fmax(b, a).to_bits(), hi.to_bits());
            prop_assert_eq!(fmin(b, a).to_bits(), lo.to_bits());
        }
    }
}
