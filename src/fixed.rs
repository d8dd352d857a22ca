// ============================================================================
// Fixed-Point Number
// Q-format arithmetic on a 32-bit signed container with compile-time
// fractional precision
// ============================================================================

use crate::error::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-point number with compile-time fractional precision.
///
/// Internally stores `value × 2^F` as an i32. The low `F` bits hold the
/// fraction, the remaining `32 - F` bits (sign included) hold the integer
/// part. `F` must be less than 31.
///
/// # Type Parameter
/// - `F`: Number of fractional bits. Default is 8 (Q24.8).
///
/// # Value Range
/// With F=8 (default):
/// - Minimum: -8,388,608.0
/// - Maximum: +8,388,607.99609375
/// - Precision: 1/256 (0.00390625)
///
/// # Overflow
/// Addition, subtraction, negation, and the shift-based constructor wrap in
/// two's complement, exactly like the native integer container. Nothing
/// saturates and nothing panics. The only signaled failures are the domain
/// errors: division or remainder by zero, and square root of a negative
/// value.
///
/// # Example
/// ```ignore
/// use fixq::Q24_8;
///
/// let a = Q24_8::from_f32(1.5);     // raw = 384
/// let b = Q24_8::from_int(2);       // raw = 512
/// let p = a * b;                    // 3.0
/// assert_eq!(p.to_f32(), 3.0);
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Fixed<const F: u32 = 8>(i32);

impl<const F: u32> Fixed<F> {
    /// Number of fractional bits
    pub const FRAC_BITS: u32 = F;

    /// The scale factor (2^F), one whole unit in raw terms
    pub const SCALE: i32 = 1 << F;

    /// Mask selecting the fractional bits of the raw value
    pub const FRAC_MASK: i32 = Self::SCALE - 1;

    /// Quick-access multiplier for converting from a float to fixed point
    pub const FROM_FLOAT_FACTOR: f32 = Self::SCALE as f32;

    /// Quick-access multiplier for converting from fixed point to a float
    pub const TO_FLOAT_FACTOR: f32 = 1.0 / Self::SCALE as f32;

    /// Quick-access multiplier for converting from a double to fixed point
    pub const FROM_DOUBLE_FACTOR: f64 = Self::SCALE as f64;

    /// Quick-access multiplier for converting from fixed point to a double
    pub const TO_DOUBLE_FACTOR: f64 = 1.0 / Self::SCALE as f64;

    /// Smallest representable positive magnitude (1/2^F), the default
    /// comparison tolerance against floating-point truth values
    pub const EPSILON: f32 = Self::TO_FLOAT_FACTOR;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(1 << F);

    /// Maximum representable value
    pub const MAX: Self = Self(i32::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i32::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    ///
    /// Use this when you already have a scaled value.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// Exact while `value` lies in `[-2^(31-F), 2^(31-F) - 1]`; outside
    /// that range the shifted-out high bits are silently discarded, i.e.
    /// the result wraps. There is no range check.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self(value << F)
    }

    /// Create from a float, truncating toward zero.
    ///
    /// Computes `(value × 2^F) as i32`. Fractional precision beyond `F`
    /// bits is dropped, not rounded; callers relying on rounding must
    /// pre-round. Out-of-range inputs saturate at the container bounds and
    /// NaN maps to zero, per the semantics of the native cast.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self((value * Self::FROM_FLOAT_FACTOR) as i32)
    }

    /// Create from a double, truncating toward zero.
    ///
    /// Same contract as [`from_f32`](Self::from_f32) with an f64 source.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::FROM_DOUBLE_FACTOR) as i32)
    }

    // ========================================================================
    // Accessors & Conversions
    // ========================================================================

    /// Get the raw internal value (scaled).
    ///
    /// This is the value × 2^F.
    #[inline]
    pub const fn raw_value(self) -> i32 {
        self.0
    }

    /// Convert to an integer via arithmetic right shift.
    ///
    /// The sign-extending shift truncates toward negative infinity, so
    /// `from_f32(-1.5).to_int()` is `-2`. This deliberately differs from
    /// the toward-zero truncation of the float constructors.
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> F
    }

    /// Convert to a float. Exact up to f32 precision.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 * Self::TO_FLOAT_FACTOR
    }

    /// Convert to a double. Exact up to f64 precision.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 * Self::TO_DOUBLE_FACTOR
    }

    /// The fractional bits of the raw value, as a non-negative integer in
    /// `[0, 2^F)`.
    ///
    /// For negative values this reads the two's-complement bit pattern,
    /// not a signed fraction: `from_f32(-1.5).fract_raw()` is `128`.
    #[inline]
    pub const fn fract_raw(self) -> i32 {
        self.0 & Self::FRAC_MASK
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked fixed-point division.
    ///
    /// Widens the dividend to i64, pre-shifts it by `F`, divides by the raw
    /// divisor, and narrows back, truncating toward zero. The widened
    /// intermediate keeps the pre-shift from overflowing; narrowing wraps.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let num = (self.0 as i64) << F;
        Ok(Self((num / rhs.0 as i64) as i32))
    }

    /// Checked remainder on the raw values.
    ///
    /// Native remainder semantics: the result takes the sign of `self`.
    /// `MIN % -1` wraps to zero rather than trapping.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self(self.0.wrapping_rem(rhs.0)))
    }

    // ========================================================================
    // Math Functions
    // ========================================================================

    /// Largest integral value not greater than `self`.
    ///
    /// Clears the fractional bits, truncating toward negative infinity.
    #[inline]
    pub const fn floor(self) -> Self {
        Self(self.0 & !Self::FRAC_MASK)
    }

    /// Smallest integral value not less than `self`.
    #[inline]
    pub const fn ceil(self) -> Self {
        let fl = self.0 & !Self::FRAC_MASK;
        if self.0 & Self::FRAC_MASK != 0 {
            Self(fl.wrapping_add(Self::SCALE))
        } else {
            Self(fl)
        }
    }

    /// Absolute value, wrapping.
    ///
    /// `MIN` has no positive counterpart and wraps to itself, matching
    /// native integer `abs` overflow behavior.
    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    /// Square root, computed through f64.
    ///
    /// Converts to f64, takes the native square root, and converts back
    /// with truncation.
    ///
    /// # Errors
    /// Returns `NegativeSquareRoot` for negative inputs; the result would
    /// not be a real number.
    #[inline]
    pub fn sqrt(self) -> NumericResult<Self> {
        if self.0 < 0 {
            return Err(NumericError::NegativeSquareRoot);
        }
        Ok(Self::from_f64(self.to_f64().sqrt()))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Operators
// ============================================================================
//
// Add/Sub/Neg/Mul are total and wrap in two's complement. Div/Rem delegate
// to the checked forms and panic on a zero divisor - use checked_* where the
// divisor is not known to be nonzero.

impl<const F: u32> Add for Fixed<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<const F: u32> Sub for Fixed<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl<const F: u32> Neg for Fixed<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl<const F: u32> Mul for Fixed<F> {
    type Output = Self;

    /// Fixed-point multiply: widen to i64, multiply the raw values, shift
    /// right by `F` with truncation, narrow back with wrapping.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let wide = self.0 as i64 * rhs.0 as i64;
        Self((wide >> F) as i32)
    }
}

impl<const F: u32> Div for Fixed<F> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("fixed-point division by zero")
    }
}

impl<const F: u32> Rem for Fixed<F> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).expect("fixed-point remainder by zero")
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const F: u32> Default for Fixed<F> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const F: u32> PartialEq for Fixed<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const F: u32> Eq for Fixed<F> {}

impl<const F: u32> PartialOrd for Fixed<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<const F: u32> Ord for Fixed<F> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const F: u32> Hash for Fixed<F> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<const F: u32> From<i32> for Fixed<F> {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl<const F: u32> From<f32> for Fixed<F> {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl<const F: u32> From<f64> for Fixed<F> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const F: u32> fmt::Debug for Fixed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed<{}>({}, raw={})", F, self, self.0)
    }
}

impl<const F: u32> fmt::Display for Fixed<F> {
    /// Renders the f32 view with exactly four decimal digits ("0.0000"
    /// style). Logging and debugging output rely on this shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_f32())
    }
}

// ============================================================================
// Type Aliases for Common Formats
// ============================================================================

/// Q24.8: 24 integer bits, 8 fractional bits (the reference format)
pub type Q24_8 = Fixed<8>;

/// Q16.16: equal split between integer and fractional bits
pub type Q16_16 = Fixed<16>;

// ============================================================================
// Tests
// ============================================================================
