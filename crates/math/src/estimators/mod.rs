//! Reciprocal square root estimators
//!
//! # Modules
//!
//! - `quake`: IEEE 754 bit hack with one Newton-Raphson step
//! - `hardware`: CPU estimate instruction with optional refinement
//! - `reference`: square root followed by a division
//!
//! The bit hack and the hardware estimator share the same refinement step, [`refine`].

pub mod hardware;
pub mod quake;
pub mod reference;

use crate::traits::Binary32;

/// One Newton-Raphson iteration for `f(y) = 1/y² - x`
///
/// Given an estimate `y ≈ 1/√x`, returns `y * (1.5 - 0.5 * x * y * y)`. Each step
/// roughly doubles the number of correct bits.
///
/// # Example
///
/// ```rust
/// use rsqrt_math::refine;
///
/// let rough = 0.21_f32; // 1/√25 = 0.2
/// let better = refine(25.0, rough);
/// assert!((better - 0.2).abs() < (rough - 0.2).abs());
/// ```
#[inline(always)]
pub fn refine<T: Binary32>(x: T, y: T) -> T {
    let x_half = x * T::HALF;
    y * (T::THREE_HALVES - x_half * y * y)
}
