//! Reference reciprocal square root: `1.0 / sqrt(x)`

use crate::traits::RsqrtEstimator;

/// Reciprocal square root by square root and division
///
/// `libm::sqrtf` is correctly rounded, so this is the baseline every other
/// estimator is measured against.
///
/// # Example
///
/// ```rust
/// use rsqrt_math::reference_rsqrt;
///
/// assert_eq!(reference_rsqrt(25.0), 0.2);
/// ```
#[inline(always)]
pub fn reference_rsqrt(x: f32) -> f32 {
    1.0 / libm::sqrtf(x)
}

/// Reference estimator (square root plus division)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceEstimator;

impl RsqrtEstimator for ReferenceEstimator {
    #[inline(always)]
    fn estimate(&self, x: f32) -> f32 {
        reference_rsqrt(x)
    }

    fn name(&self) -> &'static str {
        "std::sqrt"
    }
}
