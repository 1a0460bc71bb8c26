//! Benchmark driver
//!
//! Generates the sample buffer, runs one timed pass per estimator and collects
//! everything the report needs. Passes run one after another on the calling
//! thread so their timings do not interfere.

use anyhow::{ensure, Context, Result};
use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rsqrt_math::{
    BackendType, ErrorStats, HardwareEstimator, QuakeEstimator, ReferenceEstimator,
    RsqrtEstimator,
};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default number of random samples
pub const DEFAULT_COUNT: usize = 1_000_000;

/// Default lower bound of the sample range (inclusive)
pub const DEFAULT_MIN: f32 = 0.1;

/// Default upper bound of the sample range (exclusive)
pub const DEFAULT_MAX: f32 = 1000.0;

/// Default seed for sample generation
pub const DEFAULT_SEED: u64 = 42;

/// Default input of the precision demonstration
pub const DEMO_INPUT: f32 = 25.0;

/// Settings for one benchmark run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchConfig {
    /// Number of samples
    pub count: usize,
    /// Sample range lower bound (inclusive)
    pub min: f32,
    /// Sample range upper bound (exclusive)
    pub max: f32,
    /// Seed for the sample generator
    pub seed: u64,
    /// Demonstration input
    pub input: f32,
    /// Apply the Newton-Raphson step after the hardware estimate
    pub refine: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: DEFAULT_SEED,
            input: DEMO_INPUT,
            refine: true,
        }
    }
}

impl BenchConfig {
    /// Check the settings before any work is done
    pub fn validate(&self) -> Result<()> {
        ensure!(self.count > 0, "sample count must be at least 1");
        ensure!(
            self.min.is_finite() && self.max.is_finite(),
            "sample range must be finite, got [{}, {})",
            self.min,
            self.max
        );
        ensure!(
            self.min > 0.0,
            "sample range must be positive, got min = {}",
            self.min
        );
        ensure!(
            self.min < self.max,
            "sample range is empty: [{}, {})",
            self.min,
            self.max
        );
        ensure!(
            self.input.is_finite(),
            "demonstration input must be finite, got {}",
            self.input
        );
        Ok(())
    }
}

/// All three estimators applied to one input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Demonstration {
    pub input: f32,
    pub quake: f32,
    pub simd: f32,
    pub reference: f32,
}

/// One full pass of an estimator over the sample buffer
#[derive(Debug, Clone)]
pub struct TimedPass {
    /// Report label ("SIMD", "Quake3", "std::sqrt")
    pub label: &'static str,
    /// Wall-clock time of the pass
    pub elapsed: Duration,
    /// Estimator output, index-aligned with the samples
    pub results: Vec<f32>,
}

impl TimedPass {
    /// Elapsed time in milliseconds
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Everything produced by one benchmark run
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub demo: Demonstration,
    pub backend: BackendType,
    pub refine: bool,
    pub sample_count: usize,
    /// In run order: SIMD, Quake3, std::sqrt
    pub passes: [TimedPass; 3],
}

impl BenchReport {
    /// Relative error of the SIMD and Quake3 passes against the std::sqrt pass
    pub fn accuracy(&self) -> [(&'static str, ErrorStats); 2] {
        let [simd, quake, reference] = &self.passes;
        [
            (simd.label, ErrorStats::compare(&simd.results, &reference.results)),
            (quake.label, ErrorStats::compare(&quake.results, &reference.results)),
        ]
    }
}

/// Run every estimator on the demonstration input
pub fn demonstrate(input: f32, hardware: &HardwareEstimator) -> Demonstration {
    Demonstration {
        input,
        quake: QuakeEstimator.estimate(input),
        simd: hardware.estimate(input),
        reference: ReferenceEstimator.estimate(input),
    }
}

/// Uniform samples over `[min, max)` from a generator seeded with `seed`
///
/// The same seed gives the same sequence on the same platform and toolchain.
/// Every sample is strictly below `max`, however narrow the range.
pub fn generate_samples(count: usize, min: f32, max: f32, seed: u64) -> Result<Vec<f32>> {
    let dist = Uniform::new(min, max)
        .with_context(|| format!("cannot sample from [{}, {})", min, max))?;
    let rng = StdRng::seed_from_u64(seed);
    Ok(rng.sample_iter(dist).take(count).collect())
}

/// Apply `estimator` to every sample in order, timing the whole pass
pub fn time_pass<E: RsqrtEstimator>(label: &'static str, estimator: &E, samples: &[f32]) -> TimedPass {
    let mut results = vec![0.0f32; samples.len()];
    let samples = black_box(samples);

    let start = Instant::now();
    for (out, &x) in results.iter_mut().zip(samples) {
        *out = estimator.estimate(x);
    }
    let elapsed = start.elapsed();
    black_box(&results);

    debug!(
        label,
        estimator = estimator.name(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "timed pass finished"
    );

    TimedPass {
        label,
        elapsed,
        results,
    }
}

/// Run the whole benchmark: demonstration, sample generation, three timed passes
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let hardware = HardwareEstimator::new().refined(config.refine);
    info!(
        backend = %hardware.backend(),
        refine = config.refine,
        "selected hardware estimator"
    );

    let demo = demonstrate(config.input, &hardware);

    let samples = generate_samples(config.count, config.min, config.max, config.seed)?;
    info!(
        count = samples.len(),
        min = config.min,
        max = config.max,
        seed = config.seed,
        "generated samples"
    );

    let passes = [
        time_pass("SIMD", &hardware, &samples),
        time_pass("Quake3", &QuakeEstimator, &samples),
        time_pass("std::sqrt", &ReferenceEstimator, &samples),
    ];

    for pass in &passes {
        assert_eq!(
            pass.results.len(),
            samples.len(),
            "{} result buffer length differs from the sample buffer",
            pass.label
        );
    }

    Ok(BenchReport {
        demo,
        backend: hardware.backend(),
        refine: config.refine,
        sample_count: samples.len(),
        passes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BenchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let base = BenchConfig::default();
        let invalid = [
            BenchConfig { count: 0, ..base },
            BenchConfig { min: 0.0, ..base },
            BenchConfig { min: -1.0, ..base },
            BenchConfig { min: 5.0, max: 5.0, ..base },
            BenchConfig { min: 5.0, max: 1.0, ..base },
            BenchConfig { max: f32::INFINITY, ..base },
            BenchConfig { min: f32::NAN, ..base },
            BenchConfig { input: f32::NAN, ..base },
        ];

        for config in invalid {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn test_samples_reproducible() {
        let a = generate_samples(1000, 0.1, 1000.0, 42).unwrap();
        let b = generate_samples(1000, 0.1, 1000.0, 42).unwrap();
        assert_eq!(a, b);

        let c = generate_samples(1000, 0.1, 1000.0, 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_samples_in_range() {
        let samples = generate_samples(100_000, 0.1, 1000.0, 7).unwrap();
        assert_eq!(samples.len(), 100_000);
        assert!(samples.iter().all(|&x| (0.1..1000.0).contains(&x)));

        // Uniform over the range: the mean sits near the midpoint
        let mean = samples.iter().map(|&x| x as f64).sum::<f64>() / samples.len() as f64;
        assert!((mean - 500.05).abs() < 10.0, "mean {}", mean);
    }

    #[test]
    fn test_narrow_range_excludes_max() {
        // A few ulps wide at 1000.0, where rounding up to max is likely
        let (min, max) = (999.99f32, 1000.0f32);
        let config = BenchConfig {
            min,
            max,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_ok());

        for seed in [7, 42] {
            let samples = generate_samples(100_000, min, max, seed).unwrap();
            let at_or_above = samples.iter().filter(|&&x| x >= max).count();
            assert_eq!(at_or_above, 0, "seed {}", seed);
            assert!(samples.iter().all(|&x| x >= min));
        }
    }

    #[test]
    fn test_adjacent_floats_range() {
        // One representable value in [min, max)
        let min = 1.0f32;
        let max = f32::from_bits(min.to_bits() + 1);
        let samples = generate_samples(1000, min, max, 42).unwrap();
        assert!(samples.iter().all(|&x| x == min));
    }

    #[test]
    fn test_time_pass_fills_buffer() {
        let samples = [0.25f32, 1.0, 4.0, 25.0];
        let pass = time_pass("std::sqrt", &ReferenceEstimator, &samples);
        assert_eq!(pass.results, vec![2.0, 1.0, 0.5, 0.2]);
        assert!(pass.millis() >= 0.0);
    }

    #[test]
    fn test_demonstration() {
        let demo = demonstrate(25.0, &HardwareEstimator::new());
        assert_eq!(demo.reference, 0.2);
        assert!(demo.quake > 0.1992 && demo.quake < 0.2008);
        assert!((demo.simd - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_run_end_to_end() {
        let config = BenchConfig::default();
        let report = run(&config).unwrap();

        assert_eq!(report.sample_count, 1_000_000);
        let labels: Vec<_> = report.passes.iter().map(|pass| pass.label).collect();
        assert_eq!(labels, ["SIMD", "Quake3", "std::sqrt"]);
        for pass in &report.passes {
            assert_eq!(pass.results.len(), 1_000_000);
            assert!(pass.millis() >= 0.0);
        }

        let [(simd_label, simd), (quake_label, quake)] = report.accuracy();
        assert_eq!(simd_label, "SIMD");
        assert_eq!(quake_label, "Quake3");
        assert!(quake.max < 0.0018);
        assert!(simd.max <= quake.max);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = BenchConfig {
            count: 0,
            ..BenchConfig::default()
        };
        assert!(run(&config).is_err());
    }
}
