//! Fast inverse square root bit hack
//!
//! Halving the raw bits of a float roughly halves its exponent, and subtracting
//! that from a tuned constant negates it, giving a first guess at `1/√x` that is
//! within about 3.4%. One Newton-Raphson step brings it under 0.18%.

use super::refine;
use crate::traits::{Binary32, RsqrtEstimator};

/// Magic constant of the bit hack
pub const QUAKE_MAGIC: u32 = 0x5F37_59DF;

/// Zeroth-order estimate: the bit hack without refinement
///
/// # Error Bounds
///
/// - Maximum relative error: ~3.5%
#[inline(always)]
pub fn quake_rsqrt_estimate<T: Binary32>(number: T) -> T {
    const {
        assert!(
            core::mem::size_of::<T>() == 4,
            "quake_rsqrt only supports 32-bit floats"
        )
    };

    let i = number.to_bits();
    // Out-of-domain inputs (sign bit set) shift past the magic, wrap instead of panicking
    T::from_bits(QUAKE_MAGIC.wrapping_sub(i >> 1))
}

/// Fast inverse square root: bit hack plus one Newton-Raphson step
///
/// # Error Bounds
///
/// - Maximum relative error: <0.18% for finite positive inputs
/// - Zero, negative, NaN and infinite inputs give meaningless values, never a panic
///
/// # Example
///
/// ```rust
/// use rsqrt_math::quake_rsqrt;
///
/// let y = quake_rsqrt(25.0_f32);
/// assert!(y > 0.1992 && y < 0.2008);
/// ```
///
/// Only 32-bit float types are accepted. A `Binary32` implementation for a wider
/// type compiles, but calling this function with it is a build error:
///
/// ```rust,compile_fail
/// use core::ops::{Mul, Sub};
/// use rsqrt_math::{quake_rsqrt, Binary32};
///
/// #[derive(Clone, Copy)]
/// struct Wide(f64);
///
/// impl Mul for Wide {
///     type Output = Self;
///     fn mul(self, rhs: Self) -> Self {
///         Wide(self.0 * rhs.0)
///     }
/// }
///
/// impl Sub for Wide {
///     type Output = Self;
///     fn sub(self, rhs: Self) -> Self {
///         Wide(self.0 - rhs.0)
///     }
/// }
///
/// impl Binary32 for Wide {
///     const HALF: Self = Wide(0.5);
///     const THREE_HALVES: Self = Wide(1.5);
///     fn to_bits(self) -> u32 {
///         self.0.to_bits() as u32
///     }
///     fn from_bits(bits: u32) -> Self {
///         Wide(f64::from(f32::from_bits(bits)))
///     }
/// }
///
/// let _ = quake_rsqrt(Wide(25.0));
/// ```
#[inline(always)]
pub fn quake_rsqrt<T: Binary32>(number: T) -> T {
    refine(number, quake_rsqrt_estimate(number))
}

/// Bit hack estimator ("Quake III" variant)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuakeEstimator;

impl RsqrtEstimator for QuakeEstimator {
    #[inline(always)]
    fn estimate(&self, x: f32) -> f32 {
        quake_rsqrt(x)
    }

    fn name(&self) -> &'static str {
        "quake"
    }
}
