#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! rsqrt-math: reciprocal square root estimators for `f32`
//!
//! Three interchangeable ways to compute `1/√x`, all implementing [`RsqrtEstimator`]:
//!
//! - [`QuakeEstimator`]: the IEEE 754 bit hack with one Newton-Raphson step
//! - [`HardwareEstimator`]: the CPU's approximate reciprocal square root instruction
//! - [`ReferenceEstimator`]: square root followed by a division
//!
//! Plus [`ErrorStats`] for comparing an estimator's output against the reference.

// Reference square root for no_std builds
extern crate libm;

// Core trait definitions
pub mod traits;

// Platform-specific estimate instructions
pub mod backends;

// Estimator implementations
pub mod estimators;

// Relative error statistics
pub mod accuracy;

pub use traits::{Binary32, RsqrtEstimator};

pub use backends::{BackendType, CpuFeatures};

pub use estimators::hardware::HardwareEstimator;
pub use estimators::quake::{quake_rsqrt, quake_rsqrt_estimate, QuakeEstimator, QUAKE_MAGIC};
pub use estimators::reference::{reference_rsqrt, ReferenceEstimator};
pub use estimators::refine;

pub use accuracy::{relative_error, ErrorStats};
