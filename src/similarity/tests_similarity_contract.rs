// =========================================================================
// FALSIFY-AF: affinity correlation contract (afinidad similarity)
//
// Five-Whys (PMAT-412):
//   Why 1: afinidad had no inline FALSIFY-AF-* tests for correlation
//   Why 2: similarity tests exist but lack contract-mapped FALSIFY naming
//   Why 3: no YAML contract for pairwise correlation yet
//   Why 4: afinidad predates the inline FALSIFY convention
//   Why 5: pairwise filtering was "obviously correct" (a zip and a filter)
//
// References:
//   - Cauchy-Schwarz inequality: |Cov(X,Y)| <= sigma_X * sigma_Y, so |rho| <= 1
// =========================================================================

use super::*;

/// FALSIFY-AF-001: Correlation is bounded: -1 <= rho <= 1
#[test]
fn falsify_af_001_bounded() {
    let x = Vector::from_slice(&[1.0, 4.0, 2.0, 8.0, 5.0]);
    let y = Vector::from_slice(&[2.0, 3.0, 1.0, 7.0, 6.0]);
    let r = pearson(&x, &y).expect("valid");

    assert!(
        (-1.0 - 1e-5..=1.0 + 1e-5).contains(&r),
        "FALSIFIED AF-001: rho={r}, expected in [-1, 1]"
    );
}

/// FALSIFY-AF-002: Correlation is symmetric: rho(x, y) = rho(y, x)
#[test]
fn falsify_af_002_symmetric() {
    let a = [Some(5.0), Some(4.0), None, Some(1.0)];
    let b = [Some(2.0), Some(5.0), Some(3.0), Some(4.0)];

    let ab = pearson_pairwise(&a, &b).expect("three complete pairs");
    let ba = pearson_pairwise(&b, &a).expect("three complete pairs");

    assert!(
        (ab - ba).abs() < 1e-6,
        "FALSIFIED AF-002: rho(a,b)={ab} != rho(b,a)={ba}"
    );
}

/// FALSIFY-AF-003: Self-correlation of varying data is 1
#[test]
fn falsify_af_003_self_correlation() {
    let a = [Some(5.0), Some(3.0), None, Some(1.0)];
    let r = pearson_pairwise(&a, &a).expect("three complete pairs with variance");

    assert!(
        (r - 1.0).abs() < 1e-5,
        "FALSIFIED AF-003: rho(a,a)={r}, expected 1.0"
    );
}

/// FALSIFY-AF-004: Hole positions carry no weight: dropping a pair where
/// either side is None leaves the coefficient unchanged
#[test]
fn falsify_af_004_holes_ignored() {
    let dense_a = [Some(5.0), Some(4.0), Some(1.0)];
    let dense_b = [Some(2.0), Some(5.0), Some(4.0)];
    let holey_a = [Some(5.0), None, Some(4.0), Some(1.0), None];
    let holey_b = [Some(2.0), Some(9.0), Some(5.0), Some(4.0), None];

    let dense = pearson_pairwise(&dense_a, &dense_b).expect("complete");
    let holey = pearson_pairwise(&holey_a, &holey_b).expect("same three pairs");

    assert!(
        (dense - holey).abs() < 1e-6,
        "FALSIFIED AF-004: dense={dense} != holey={holey}"
    );
}

mod af_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn synthetic_series(seed: u32, n: usize, phase: f32) -> Vec<f32> {
        (0..n)
            .map(|i| ((i as f32 + seed as f32) * 0.37 + phase).sin() * 4.0)
            .collect()
    }

    /// FALSIFY-AF-001-prop: Correlation bounded in [-1, 1] for random data
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_af_001_prop_bounded(
            seed in 0..1000u32,
            n in 3..=30usize,
        ) {
            let x = Vector::from_vec(synthetic_series(seed, n, 0.0));
            let y = Vector::from_vec(synthetic_series(seed, n, 1.3));

            let r = pearson(&x, &y).expect("sin series always vary");

            prop_assert!(
                (-1.0 - 1e-4..=1.0 + 1e-4).contains(&r),
                "FALSIFIED AF-001-prop: rho={} out of [-1, 1] (n={}, seed={})",
                r, n, seed
            );
        }
    }

    /// FALSIFY-AF-002-prop: Symmetry under argument swap for random holes
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_af_002_prop_symmetric(
            seed in 0..1000u32,
            n in 4..=30usize,
        ) {
            let xs = synthetic_series(seed, n, 0.0);
            let ys = synthetic_series(seed, n, 2.1);
            let x: Vec<Option<f32>> = xs
                .iter()
                .enumerate()
                .map(|(i, &v)| if (seed >> (i % 16)) & 1 == 0 { Some(v) } else { None })
                .collect();
            let y: Vec<Option<f32>> = ys
                .iter()
                .enumerate()
                .map(|(i, &v)| if (seed >> ((i + 5) % 16)) & 1 == 0 { Some(v) } else { None })
                .collect();

            let xy = pearson_pairwise(&x, &y);
            let yx = pearson_pairwise(&y, &x);

            match (xy, yx) {
                (Some(a), Some(b)) => prop_assert!(
                    (a - b).abs() < 1e-5,
                    "FALSIFIED AF-002-prop: rho(x,y)={} != rho(y,x)={} (n={}, seed={})",
                    a, b, n, seed
                ),
                (None, None) => {}
                (a, b) => prop_assert!(
                    false,
                    "FALSIFIED AF-002-prop: definedness asymmetric: {:?} vs {:?}",
                    a, b
                ),
            }
        }
    }

    /// FALSIFY-AF-005-prop: Pairwise agrees with strict on fully present data
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_af_005_prop_pairwise_matches_strict(
            seed in 0..1000u32,
            n in 3..=30usize,
        ) {
            let xs = synthetic_series(seed, n, 0.0);
            let ys = synthetic_series(seed, n, 0.7);

            let strict = pearson(&Vector::from_slice(&xs), &Vector::from_slice(&ys))
                .expect("sin series always vary");
            let x: Vec<Option<f32>> = xs.iter().map(|&v| Some(v)).collect();
            let y: Vec<Option<f32>> = ys.iter().map(|&v| Some(v)).collect();
            let pairwise = pearson_pairwise(&x, &y).expect("all pairs present");

            prop_assert!(
                (strict - pairwise).abs() < 1e-5,
                "FALSIFIED AF-005-prop: strict={} != pairwise={} (n={}, seed={})",
                strict, pairwise, n, seed
            );
        }
    }
}
