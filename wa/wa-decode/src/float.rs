//! IEEE-754 min/max with NaN propagation and signed-zero ordering.
//!
//! Unlike [`f64::max`], a NaN operand is returned rather than suppressed, and
//! `-0.0` orders below `+0.0`.

macro_rules! min_max {
    ($max:ident, $min:ident, $t:ty) => {
        /// Larger operand; NaN if either operand is NaN, `+0.0` wins a zero tie.
        #[inline]
        pub fn $max(a: $t, b: $t) -> $t {
            if a.is_nan() {
                return a;
            }
            if b.is_nan() {
                return b;
            }
            if a == b {
                // Only zeros of opposite sign compare equal with differing bits.
                return if a.is_sign_negative() { b } else { a };
            }
            if a > b {
                a
            } else {
                b
            }
        }

        /// Smaller operand; NaN if either operand is NaN, `-0.0` wins a zero tie.
        #[inline]
        pub fn $min(a: $t, b: $t) -> $t {
            if a.is_nan() {
                return a;
            }
            if b.is_nan() {
                return b;
            }
            if a == b {
                return if a.is_sign_negative() { a } else { b };
            }
            if a < b {
                a
            } else {
                b
            }
        }
    };
}

min_max!(fmax, fmin, f64);
min_max!(fmax32, fmin32, f32);
