//! Hardware-approximate reciprocal square root
//!
//! Uses the CPU's single-lane estimate instruction (`rsqrtss` on x86, `frsqrte` on
//! aarch64), then optionally one Newton-Raphson step, the same one the bit hack uses.
//!
//! # Error Bounds
//!
//! | Backend | Raw estimate | Refined |
//! |---------|--------------|---------|
//! | SSE     | ≤ 3.7e-4     | ~1e-6   |
//! | NEON    | ≤ 7.8e-3     | ≤ 1e-4  |
//! | Scalar  | reference    | reference |

use super::reference::reference_rsqrt;
use super::refine;
use crate::backends::BackendType;
use crate::traits::RsqrtEstimator;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::backends::sse;

#[cfg(target_arch = "aarch64")]
use crate::backends::neon;

/// Estimator backed by the CPU's approximate reciprocal square root instruction
///
/// The backend is fixed at construction. On CPUs without an estimate instruction
/// the `Scalar` backend is used, which returns the reference result unrefined.
///
/// # Example
///
/// ```rust
/// use rsqrt_math::{HardwareEstimator, RsqrtEstimator};
///
/// let estimator = HardwareEstimator::new();
/// let y = estimator.estimate(25.0);
/// assert!((y - 0.2).abs() < 1e-4);
///
/// let raw = estimator.refined(false).estimate(25.0);
/// assert!((raw - 0.2).abs() < 2e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareEstimator {
    backend: BackendType,
    refine: bool,
}

impl HardwareEstimator {
    /// Create an estimator on the best backend for this CPU, with refinement on
    pub fn new() -> Self {
        Self {
            backend: BackendType::detect(),
            refine: true,
        }
    }

    /// Create an estimator on a specific backend
    ///
    /// Returns `None` if the backend cannot run on this CPU.
    pub fn with_backend(backend: BackendType) -> Option<Self> {
        backend.is_available().then_some(Self {
            backend,
            refine: true,
        })
    }

    /// Enable or disable the Newton-Raphson step after the hardware estimate
    pub fn refined(self, refine: bool) -> Self {
        Self { refine, ..self }
    }

    /// The backend this estimator dispatches to
    pub fn backend(&self) -> BackendType {
        self.backend
    }

    /// Whether the Newton-Raphson step is applied
    pub fn is_refined(&self) -> bool {
        self.refine
    }
}

impl Default for HardwareEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RsqrtEstimator for HardwareEstimator {
    #[inline(always)]
    fn estimate(&self, x: f32) -> f32 {
        let y = match self.backend {
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            // SAFETY: the Sse backend is only constructed when SSE was detected
            BackendType::Sse => unsafe { sse::rsqrt_estimate(x) },
            #[cfg(target_arch = "aarch64")]
            BackendType::Neon => neon::rsqrt_estimate(x),
            _ => return reference_rsqrt(x),
        };

        if self.refine {
            refine(x, y)
        } else {
            y
        }
    }

    fn name(&self) -> &'static str {
        "simd"
    }
}
