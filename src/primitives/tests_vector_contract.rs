// =========================================================================
// FALSIFY-VE: Vector primitives contract (afinidad primitives)
//
// Five-Whys (PMAT-403):
//   Why 1: afinidad had no inline FALSIFY-VE-* tests for Vector
//   Why 2: vector tests exist but lack contract-mapped FALSIFY naming
//   Why 3: no YAML contract for vector primitives yet
//   Why 4: afinidad predates the inline FALSIFY convention
//   Why 5: Vector statistics were "obviously correct" (basic reductions)
//
// References:
//   - Order statistics: min(x) <= mean(x) <= max(x)
// =========================================================================

use super::*;

/// FALSIFY-VE-001: Mean equals sum / length
#[test]
fn falsify_ve_001_mean_equals_sum_over_len() {
    let v = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);

    let mean = v.mean();
    let expected = v.sum() / v.len() as f32;

    assert!(
        (mean - expected).abs() < 1e-6,
        "FALSIFIED VE-001: mean={mean}, expected sum/len={expected}"
    );
    assert!(
        (mean - 6.0).abs() < 1e-6,
        "FALSIFIED VE-001: mean={mean}, expected 6.0"
    );
}

/// FALSIFY-VE-002: Variance is non-negative and stddev is its square root
#[test]
fn falsify_ve_002_variance_nonneg() {
    let v = Vector::from_slice(&[-3.0, 4.0, 1.0, -2.0]);

    let var = v.variance();
    let std = v.stddev();

    assert!(var >= 0.0, "FALSIFIED VE-002: variance={var}, expected >= 0");
    assert!(
        (std * std - var).abs() < 1e-5,
        "FALSIFIED VE-002: stddev^2={} != variance={var}",
        std * std
    );
}

/// FALSIFY-VE-003: Mean is bracketed by min and max
#[test]
fn falsify_ve_003_mean_bracketed() {
    let v = Vector::from_slice(&[1.0, 5.0, 2.0, 4.0]);

    let min = v.min().expect("non-empty");
    let max = v.max().expect("non-empty");
    let mean = v.mean();

    assert!(
        min <= mean && mean <= max,
        "FALSIFIED VE-003: mean={mean} outside [{min}, {max}]"
    );
}

/// FALSIFY-VE-004: Extremes of empty data are rejected, not invented
#[test]
fn falsify_ve_004_empty_extremes_rejected() {
    let v: Vector<f32> = Vector::from_vec(vec![]);

    assert!(
        v.min().is_err(),
        "FALSIFIED VE-004: min of empty vector produced a value"
    );
    assert!(
        v.max().is_err(),
        "FALSIFIED VE-004: max of empty vector produced a value"
    );
}

mod ve_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn synthetic_series(seed: u32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| ((i as f32 + seed as f32) * 0.53).sin() * 4.0)
            .collect()
    }

    /// FALSIFY-VE-003-prop: min <= mean <= max for random data
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_ve_003_prop_mean_bracketed(
            seed in 0..1000u32,
            n in 1..=40usize,
        ) {
            let v = Vector::from_vec(synthetic_series(seed, n));

            let min = v.min().expect("non-empty");
            let max = v.max().expect("non-empty");
            let mean = v.mean();

            prop_assert!(
                min - 1e-5 <= mean && mean <= max + 1e-5,
                "FALSIFIED VE-003-prop: mean={} outside [{}, {}] (n={}, seed={})",
                mean, min, max, n, seed
            );
        }
    }

    /// FALSIFY-VE-005-prop: Variance is invariant under constant shift
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_ve_005_prop_variance_shift_invariant(
            seed in 0..1000u32,
            n in 2..=40usize,
            shift_steps in -50i32..=50,
        ) {
            let xs = synthetic_series(seed, n);
            let shift = shift_steps as f32 * 0.1;
            let shifted: Vec<f32> = xs.iter().map(|&x| x + shift).collect();

            let var = Vector::from_vec(xs).variance();
            let var_shifted = Vector::from_vec(shifted).variance();

            prop_assert!(
                (var - var_shifted).abs() < 1e-3,
                "FALSIFIED VE-005-prop: var={} != shifted var={} (shift={}, n={}, seed={})",
                var, var_shifted, shift, n, seed
            );
        }
    }
}
