//! Console report
//!
//! Three precision lines for the demonstration input, then one timing line per
//! pass. The accuracy section is only written on request.

use std::io::{self, Write};

use rsqrt_math::BackendType;

use crate::driver::BenchReport;

/// Write the report for one benchmark run
pub fn write_report<W: Write>(out: &mut W, report: &BenchReport, show_accuracy: bool) -> io::Result<()> {
    let demo = &report.demo;
    writeln!(out, "Quake3 InvSqrt({}) ≈ {}", demo.input, demo.quake)?;
    writeln!(out, "SIMD InvSqrt({}) ≈ {}", demo.input, demo.simd)?;
    writeln!(out, "std::sqrt 1/sqrt({}) = {}", demo.input, demo.reference)?;

    for pass in &report.passes {
        writeln!(out, "{} Time: {:.4} ms", pass.label, pass.millis())?;
    }

    if show_accuracy {
        // The scalar fallback is the reference itself, never refined
        let refinement = match report.backend {
            BackendType::Scalar => "reference fallback",
            _ if report.refine => "refined",
            _ => "unrefined",
        };
        writeln!(out)?;
        writeln!(
            out,
            "Relative error vs std::sqrt over {} samples (SIMD backend: {}, {})",
            report.sample_count, report.backend, refinement
        )?;
        for (label, stats) in report.accuracy() {
            writeln!(
                out,
                "{} max: {:.3e}, mean: {:.3e}",
                label, stats.max, stats.mean
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{Demonstration, TimedPass};
    use std::time::Duration;

    fn pass(label: &'static str, micros: u64, results: Vec<f32>) -> TimedPass {
        TimedPass {
            label,
            elapsed: Duration::from_micros(micros),
            results,
        }
    }

    fn sample_report() -> BenchReport {
        BenchReport {
            demo: Demonstration {
                input: 25.0,
                quake: 0.1999,
                simd: 0.19999,
                reference: 0.2,
            },
            backend: BackendType::Sse,
            refine: true,
            sample_count: 2,
            passes: [
                pass("SIMD", 1500, vec![0.5, 0.25]),
                pass("Quake3", 2250, vec![0.499, 0.25]),
                pass("std::sqrt", 12_345, vec![0.5, 0.25]),
            ],
        }
    }

    fn render(report: &BenchReport, show_accuracy: bool) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, show_accuracy).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_report_lines() {
        let text = render(&sample_report(), false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            [
                "Quake3 InvSqrt(25) ≈ 0.1999",
                "SIMD InvSqrt(25) ≈ 0.19999",
                "std::sqrt 1/sqrt(25) = 0.2",
                "SIMD Time: 1.5000 ms",
                "Quake3 Time: 2.2500 ms",
                "std::sqrt Time: 12.3450 ms",
            ]
        );
    }

    #[test]
    fn test_accuracy_section() {
        let text = render(&sample_report(), true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[6], "");
        assert!(lines[7].contains("over 2 samples"));
        assert!(lines[7].contains("sse, refined"));
        assert!(lines[8].starts_with("SIMD max: 0.000e0"));
        assert!(lines[9].starts_with("Quake3 max: 2.000e-3"));
    }

    #[test]
    fn test_accuracy_header_refinement() {
        let mut report = sample_report();
        report.refine = false;
        let text = render(&report, true);
        assert!(text.contains("(SIMD backend: sse, unrefined)"), "{}", text);

        // Scalar returns the reference result whatever the refine setting
        for refine in [true, false] {
            report.backend = BackendType::Scalar;
            report.refine = refine;
            let text = render(&report, true);
            assert!(text.contains("(SIMD backend: scalar, reference fallback)"), "{}", text);
            assert!(!text.contains("refined"), "{}", text);
        }
    }
}
