//! NEON backend (aarch64)
//!
//! `frsqrte` is an 8-bit table lookup, much coarser than the SSE estimate, so the
//! refinement step matters more here. NEON is mandatory for aarch64, so no
//! runtime detection is needed.

// This backend only compiles on aarch64 targets
#![cfg(target_arch = "aarch64")]

use core::arch::aarch64::*;

/// Relative error bound of `frsqrte`, roughly 8 significant bits with one bit of slack
pub const MAX_RELATIVE_ERROR: f32 = 1.0 / 128.0;

/// Hardware reciprocal square root estimate of a single value
///
/// Broadcasts `x` into a two-lane `float32x2_t`, runs `vrsqrte_f32` and extracts
/// lane 0. No refinement is applied.
#[inline(always)]
pub fn rsqrt_estimate(x: f32) -> f32 {
    unsafe {
        let lane = vdup_n_f32(x);
        vget_lane_f32::<0>(vrsqrte_f32(lane))
    }
}
