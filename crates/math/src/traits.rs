//! Core trait definitions
//!
//! [`Binary32`] describes the float types the bit hack may be written against, and
//! [`RsqrtEstimator`] is the common signature shared by every estimator.

use core::ops::{Mul, Sub};

/// A float type stored as exactly 32 IEEE 754 bits
///
/// The bit hack only makes sense for the single-precision layout (1 sign bit,
/// 8 exponent bits, 23 mantissa bits). Only `f32` implements this trait in this crate.
///
/// `to_bits`/`from_bits` are pure bit reinterpretations, never numeric conversions:
///
/// ```rust
/// use rsqrt_math::Binary32;
///
/// assert_eq!(<f32 as Binary32>::to_bits(1.0), 0x3F80_0000);
/// assert_eq!(<f32 as Binary32>::from_bits(0x4000_0000), 2.0);
/// ```
pub trait Binary32: Copy + Mul<Output = Self> + Sub<Output = Self> {
    /// The value 0.5
    const HALF: Self;

    /// The value 1.5
    const THREE_HALVES: Self;

    /// Reinterpret the storage of `self` as a `u32`
    fn to_bits(self) -> u32;

    /// Reinterpret a `u32` bit pattern as `Self`
    fn from_bits(bits: u32) -> Self;
}

impl Binary32 for f32 {
    const HALF: Self = 0.5;
    const THREE_HALVES: Self = 1.5;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }
}

/// Reciprocal square root estimator
///
/// Every estimator computes an approximation of `1/√x` for a finite, strictly
/// positive `x`. Inputs outside that domain are not checked and give meaningless
/// (but non-panicking) results.
///
/// # Example
///
/// ```rust
/// use rsqrt_math::{QuakeEstimator, ReferenceEstimator, RsqrtEstimator};
///
/// fn spread<E: RsqrtEstimator>(estimator: &E, x: f32) -> f32 {
///     (estimator.estimate(x) - ReferenceEstimator.estimate(x)).abs()
/// }
///
/// assert!(spread(&QuakeEstimator, 4.0) < 1e-3);
/// assert_eq!(QuakeEstimator.name(), "quake");
/// ```
pub trait RsqrtEstimator {
    /// Approximate `1/√x`
    fn estimate(&self, x: f32) -> f32;

    /// Short identifier for logging and reports
    fn name(&self) -> &'static str;
}
