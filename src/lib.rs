// ============================================================================
// fixq Library
// Q-format fixed-point arithmetic on a 32-bit signed container
// ============================================================================

//! # fixq
//!
//! Fixed-point arithmetic over a 32-bit signed integer, interpreted as a
//! Q-format number with a compile-time fractional-bit count. The reference
//! format is Q24.8: 24 integer bits (sign included) and 8 fractional bits.
//!
//! ## Features
//!
//! - **Single i32 of state** - every value is a scaled integer, every
//!   operation a pure function over it
//! - **Wrapping by design** - add/sub/abs overflow follows two's-complement
//!   wraparound, mirroring the native container; nothing panics
//! - **Explicit domain errors** - division, remainder, and square root
//!   return `Result` for their undefined inputs instead of trapping
//! - **Compile-time precision** via const generics: `Fixed<8>` is Q24.8,
//!   `Fixed<16>` is Q16.16
//!
//! ## Example
//!
//! ```rust
//! use fixq::Q24_8;
//!
//! let a = Q24_8::from_int(3);
//! assert_eq!(a.raw_value(), 768);
//! assert_eq!(a.to_f32(), 3.0);
//!
//! let b = Q24_8::from_f32(1.5);
//! assert_eq!((a * b).to_f32(), 4.5);
//! assert_eq!((a - b).to_string(), "1.5000");
//!
//! // Division by zero is an error, not a trap
//! assert!(a.checked_div(Q24_8::ZERO).is_err());
//! ```

pub mod error;
pub mod fixed;

// Re-exports for convenience
pub use error::{NumericError, NumericResult};
pub use fixed::{Fixed, Q16_16, Q24_8};
