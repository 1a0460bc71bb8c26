//! Backend selection tests
//!
//! Verifies that the hardware estimator lands on a backend that can run on the
//! current CPU and that every constructible backend gives sane results.

use rsqrt_math::{BackendType, CpuFeatures, HardwareEstimator, RsqrtEstimator};

const ALL_BACKENDS: [BackendType; 3] = [BackendType::Scalar, BackendType::Sse, BackendType::Neon];

#[test]
fn test_default_backend_matches_detection() {
    assert_eq!(HardwareEstimator::new().backend(), BackendType::detect());
    assert_eq!(HardwareEstimator::default(), HardwareEstimator::new());
}

#[test]
fn test_detection_is_stable() {
    assert_eq!(CpuFeatures::detect(), CpuFeatures::detect());
    assert_eq!(BackendType::detect(), BackendType::detect());
}

#[cfg(feature = "force-scalar")]
#[test]
fn test_force_scalar() {
    assert_eq!(BackendType::detect(), BackendType::Scalar);
    assert_eq!(HardwareEstimator::new().estimate(25.0), 0.2);
}

#[test]
fn test_with_backend_respects_availability() {
    for backend in ALL_BACKENDS {
        let estimator = HardwareEstimator::with_backend(backend);
        assert_eq!(estimator.is_some(), backend.is_available(), "{}", backend);
    }
}

#[test]
fn test_every_available_backend_is_accurate() {
    for backend in ALL_BACKENDS {
        let Some(estimator) = HardwareEstimator::with_backend(backend) else {
            println!("Skipping {}: not available on this CPU", backend);
            continue;
        };

        for x in [0.1f32, 1.0, 25.0, 999.9] {
            let expected = 1.0 / (x as f64).sqrt();
            let error = (estimator.estimate(x) as f64 - expected).abs() / expected;
            assert!(error < 1.0e-4, "{} rsqrt({}) error {:.3e}", backend, x, error);
        }
    }
}

#[test]
fn test_exactly_one_vector_backend_per_arch() {
    let vector_backends = [BackendType::Sse, BackendType::Neon]
        .into_iter()
        .filter(|backend| backend.is_available())
        .count();

    if cfg!(any(target_arch = "x86_64", target_arch = "aarch64")) {
        assert_eq!(vector_backends, 1);
    } else {
        assert!(vector_backends <= 1);
    }
}
