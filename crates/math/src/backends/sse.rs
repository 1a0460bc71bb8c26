//! SSE backend (x86/x86_64)
//!
//! `rsqrtss` returns an estimate with a relative error of at most 1.5 * 2^-12.
//! SSE is part of the x86_64 baseline; on 32-bit x86 it is detected at runtime
//! before this backend is selected.

// This backend only compiles on x86/x86_64 targets
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

/// Relative error bound of `rsqrtss` from the Intel SDM
pub const MAX_RELATIVE_ERROR: f32 = 1.5 / 4096.0;

/// Hardware reciprocal square root estimate of a single value
///
/// Loads `x` into the low lane of an `__m128`, runs `rsqrtss` on it and extracts
/// the low lane again. No refinement is applied.
///
/// # Safety
///
/// The running CPU must support SSE.
#[inline]
#[target_feature(enable = "sse")]
pub unsafe fn rsqrt_estimate(x: f32) -> f32 {
    let lane = _mm_set_ss(x);
    _mm_cvtss_f32(_mm_rsqrt_ss(lane))
}
