// ============================================================================
// Property Tests
// Structural properties of the fixed-point type over randomized raw values
// ============================================================================

use fixq::{NumericError, Q24_8};
use proptest::prelude::*;

// Raw magnitudes up to 2^24 convert to f32 without rounding, so the float
// view of such a value is an exact multiple of epsilon.
const EXACT_RAW: i32 = 1 << 24;

proptest! {
    // f32 -> fixed -> f32 is the identity for exact epsilon multiples
    #[test]
    fn prop_roundtrip_exact(raw in -EXACT_RAW..=EXACT_RAW) {
        let x = raw as f32 * Q24_8::EPSILON;
        let v = Q24_8::from_f32(x);
        prop_assert_eq!(v.raw_value(), raw);
        prop_assert_eq!(v.to_f32(), x);
    }

    // Addition commutes bit-exactly, wraparound included
    #[test]
    fn prop_addition_commutative(a in any::<i32>(), b in any::<i32>()) {
        let fa = Q24_8::from_raw(a);
        let fb = Q24_8::from_raw(b);
        prop_assert_eq!(fa + fb, fb + fa);
    }

    // Subtraction undoes addition; the wrapping group makes this hold over
    // the whole raw domain
    #[test]
    fn prop_sub_inverse_of_add(a in any::<i32>(), b in any::<i32>()) {
        let fa = Q24_8::from_raw(a);
        let fb = Q24_8::from_raw(b);
        prop_assert_eq!((fa + fb) - fb, fa);
    }

    // abs never comes out negative, except for the MIN raw value which has
    // no positive counterpart
    #[test]
    fn prop_abs_non_negative(raw in (i32::MIN + 1)..=i32::MAX) {
        let v = Q24_8::from_raw(raw).abs();
        prop_assert!(v.to_f32() >= 0.0);
        prop_assert!(!v.is_negative());
    }

    // Within the wraparound-free band the sum is exact in the f64 view
    #[test]
    fn prop_add_exact_in_f64(
        a in -(1i32 << 30)..(1i32 << 30),
        b in -(1i32 << 30)..(1i32 << 30),
    ) {
        let fa = Q24_8::from_raw(a);
        let fb = Q24_8::from_raw(b);
        prop_assert_eq!((fa + fb).to_f64(), fa.to_f64() + fb.to_f64());
    }

    // Multiply truncates by at most one epsilon against the f64 oracle
    #[test]
    fn prop_mul_near_oracle(a in -(1 << 15)..=(1 << 15), b in -(1 << 15)..=(1 << 15)) {
        let fa = Q24_8::from_raw(a);
        let fb = Q24_8::from_raw(b);
        let got = (fa * fb).to_f64();
        let want = fa.to_f64() * fb.to_f64();
        prop_assert!((got - want).abs() <= Q24_8::EPSILON as f64,
            "{} * {} = {} (oracle {})", fa.to_f64(), fb.to_f64(), got, want);
    }

    // Divide truncates by at most one epsilon against the f64 oracle
    #[test]
    fn prop_div_near_oracle(a in -(1 << 22)..=(1 << 22), b in -(1 << 22)..=(1 << 22)) {
        prop_assume!(b != 0);
        let fa = Q24_8::from_raw(a);
        let fb = Q24_8::from_raw(b);
        let got = fa.checked_div(fb).unwrap().to_f64();
        let want = fa.to_f64() / fb.to_f64();
        prop_assert!((got - want).abs() <= Q24_8::EPSILON as f64,
            "{} / {} = {} (oracle {})", fa.to_f64(), fb.to_f64(), got, want);
    }

    // Floor and ceiling bracket the value and land on whole units
    #[test]
    fn prop_floor_ceil_bracket(raw in any::<i32>()) {
        // Stay clear of the wraparound at the top whole unit
        prop_assume!(raw <= i32::MAX - Q24_8::SCALE);
        let v = Q24_8::from_raw(raw);
        let fl = v.floor();
        let cl = v.ceil();
        prop_assert!(fl <= v);
        prop_assert!(v <= cl);
        prop_assert_eq!(fl.fract_raw(), 0);
        prop_assert_eq!(cl.fract_raw(), 0);
    }

    // Division by zero is an error for every dividend
    #[test]
    fn prop_div_by_zero_is_error(raw in any::<i32>()) {
        let v = Q24_8::from_raw(raw);
        prop_assert_eq!(v.checked_div(Q24_8::ZERO), Err(NumericError::DivisionByZero));
        prop_assert_eq!(v.checked_rem(Q24_8::ZERO), Err(NumericError::DivisionByZero));
    }
}
