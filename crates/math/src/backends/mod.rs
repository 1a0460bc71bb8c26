//! Hardware estimate backends
//!
//! Each backend wraps one platform instruction that computes a low-precision
//! `1/√x` on a single vector lane. Which backend the [`HardwareEstimator`] uses is
//! decided once, from [`CpuFeatures`], when it is constructed.
//!
//! [`HardwareEstimator`]: crate::HardwareEstimator

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod sse;

#[cfg(target_arch = "aarch64")]
pub mod neon;

/// CPU feature detection results
///
/// Only the features the estimate instructions need are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    /// SSE support (`rsqrtss`), x86/x86_64
    pub has_sse: bool,

    /// NEON support (`frsqrte`), aarch64
    pub has_neon: bool,
}

impl CpuFeatures {
    /// Detect CPU features at runtime
    ///
    /// # Platform Behavior
    /// - **x86_64**: SSE is part of the baseline, `cpufeatures` resolves it at compile time
    /// - **x86**: runtime CPUID detection using `cpufeatures`
    /// - **aarch64**: NEON is mandatory, no detection needed
    /// - **other targets**: nothing is available
    ///
    /// # Example
    /// ```rust
    /// use rsqrt_math::CpuFeatures;
    ///
    /// let features = CpuFeatures::detect();
    /// if cfg!(target_arch = "x86_64") {
    ///     assert!(features.has_sse);
    /// }
    /// ```
    pub fn detect() -> Self {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            cpufeatures::new!(cpuid_sse, "sse");

            Self {
                has_sse: cpuid_sse::get(),
                has_neon: false,
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                has_sse: false,
                has_neon: true,
            }
        }

        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self::default()
        }
    }
}

/// Backend used by the hardware estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// No estimate instruction, falls back to the reference estimator
    Scalar,

    /// SSE `_mm_rsqrt_ss` (x86/x86_64)
    Sse,

    /// NEON `vrsqrte_f32` (aarch64)
    Neon,
}

impl BackendType {
    /// Select the best backend for the running CPU
    ///
    /// Always `Scalar` when the `force-scalar` feature is enabled.
    pub fn detect() -> Self {
        Self::select(CpuFeatures::detect())
    }

    /// Select the best backend for the given feature set
    ///
    /// A feature only counts when the backend for it is compiled into this build,
    /// so `has_neon` on an x86 build still selects `Scalar`.
    pub fn select(features: CpuFeatures) -> Self {
        if cfg!(feature = "force-scalar") {
            return BackendType::Scalar;
        }

        if features.has_sse && cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
            BackendType::Sse
        } else if features.has_neon && cfg!(target_arch = "aarch64") {
            BackendType::Neon
        } else {
            BackendType::Scalar
        }
    }

    /// Whether this backend can run on the current CPU
    pub fn is_available(self) -> bool {
        match self {
            BackendType::Scalar => true,
            BackendType::Sse => {
                cfg!(any(target_arch = "x86", target_arch = "x86_64"))
                    && CpuFeatures::detect().has_sse
            }
            BackendType::Neon => cfg!(target_arch = "aarch64") && CpuFeatures::detect().has_neon,
        }
    }

    /// Static string identifying the backend: "scalar", "sse" or "neon"
    pub fn name(self) -> &'static str {
        match self {
            BackendType::Scalar => "scalar",
            BackendType::Sse => "sse",
            BackendType::Neon => "neon",
        }
    }
}

impl core::fmt::Display for BackendType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
