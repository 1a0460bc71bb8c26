//! Relative error statistics
//!
//! Compares an estimator's output buffer against the reference output, element by
//! element.

/// Relative error of `actual` against `expected`
///
/// Falls back to the absolute difference when `expected` is zero.
///
/// # Example
///
/// ```rust
/// use rsqrt_math::relative_error;
///
/// assert!((relative_error(1.01, 1.0) - 0.01).abs() < 1e-6);
/// assert_eq!(relative_error(0.5, 0.5), 0.0);
/// ```
#[inline]
pub fn relative_error(actual: f32, expected: f32) -> f32 {
    let diff = libm::fabsf(actual - expected);
    let magnitude = libm::fabsf(expected);
    if magnitude > 0.0 {
        diff / magnitude
    } else {
        diff
    }
}

/// Max and mean relative error of one result buffer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ErrorStats {
    /// Largest relative error seen
    pub max: f32,
    /// Mean relative error
    pub mean: f64,
    /// Number of elements compared
    pub count: usize,
}

impl ErrorStats {
    /// Compare `actual` against `reference`, index by index
    ///
    /// # Panics
    ///
    /// Panics if the two buffers differ in length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsqrt_math::ErrorStats;
    ///
    /// let stats = ErrorStats::compare(&[1.0, 2.2], &[1.0, 2.0]);
    /// assert_eq!(stats.count, 2);
    /// assert!((stats.max - 0.1).abs() < 1e-6);
    /// assert!((stats.mean - 0.05).abs() < 1e-6);
    /// ```
    pub fn compare(actual: &[f32], reference: &[f32]) -> Self {
        assert_eq!(
            actual.len(),
            reference.len(),
            "result and reference buffers must have the same length"
        );

        let mut max = 0.0f32;
        let mut sum = 0.0f64;
        for (&a, &r) in actual.iter().zip(reference) {
            let error = relative_error(a, r);
            max = max.max(error);
            sum += error as f64;
        }

        let count = actual.len();
        let mean = if count > 0 { sum / count as f64 } else { 0.0 };

        Self { max, mean, count }
    }
}
