// =========================================================================
// FALSIFY-MX: Matrix primitives contract (afinidad primitives)
//
// Five-Whys (PMAT-405):
//   Why 1: afinidad had no inline FALSIFY-MX-* tests for Matrix
//   Why 2: matrix tests exist but lack contract-mapped FALSIFY naming
//   Why 3: no YAML contract for matrix primitives yet
//   Why 4: afinidad predates the inline FALSIFY convention
//   Why 5: cell storage was "obviously correct" (an index computation)
//
// References:
//   - Row-major layout: element (i, j) lives at offset i * n_cols + j
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Construction rejects data that does not fill the shape
#[test]
fn falsify_mx_001_shape_contract() {
    let result: Result<Matrix<f32>, _> = Matrix::from_vec(2, 3, vec![1.0; 5]);

    assert!(
        result.is_err(),
        "FALSIFIED MX-001: 5 values accepted for a 2x3 matrix"
    );
}

/// FALSIFY-MX-002: A filled matrix holds the fill value in every cell
#[test]
fn falsify_mx_002_filled_everywhere() {
    let m: Matrix<Option<f32>> = Matrix::filled(3, 4, None);

    assert_eq!(m.shape(), (3, 4), "FALSIFIED MX-002: wrong shape");
    for i in 0..3 {
        for j in 0..4 {
            assert!(
                m.get(i, j).is_none(),
                "FALSIFIED MX-002: cell ({i},{j}) not the fill value"
            );
        }
    }
}

/// FALSIFY-MX-003: Writing one cell changes that cell and no other
#[test]
fn falsify_mx_003_set_is_local() {
    let mut m: Matrix<Option<f32>> = Matrix::filled(2, 2, None);
    m.set(1, 0, Some(4.5));

    assert_eq!(m.get(1, 0), Some(4.5), "FALSIFIED MX-003: write lost");
    for (i, j) in [(0, 0), (0, 1), (1, 1)] {
        assert!(
            m.get(i, j).is_none(),
            "FALSIFIED MX-003: write to (1,0) leaked into ({i},{j})"
        );
    }
}

/// FALSIFY-MX-004: Row and column views agree with cell reads
#[test]
fn falsify_mx_004_views_agree() {
    let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("valid");

    let row = m.row(1);
    let col = m.column(2);

    for j in 0..3 {
        assert_eq!(
            row[j],
            m.get(1, j),
            "FALSIFIED MX-004: row view differs at ({j})"
        );
    }
    for i in 0..2 {
        assert_eq!(
            col[i],
            m.get(i, 2),
            "FALSIFIED MX-004: column view differs at ({i})"
        );
    }
}

/// FALSIFY-MX-005: Backing storage is row-major
#[test]
fn falsify_mx_005_row_major_layout() {
    let m = Matrix::from_vec(2, 3, vec![10, 20, 30, 40, 50, 60]).expect("valid");

    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(
                m.as_slice()[i * 3 + j],
                m.get(i, j),
                "FALSIFIED MX-005: offset {} is not cell ({i},{j})",
                i * 3 + j
            );
        }
    }
}

mod mx_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-003-prop: Round-trip through set/get for arbitrary cells
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_mx_003_prop_set_get_roundtrip(
            rows in 1..=8usize,
            cols in 1..=8usize,
            target in 0..64usize,
            value in 0..1000u32,
        ) {
            let mut m: Matrix<Option<u32>> = Matrix::filled(rows, cols, None);
            let (i, j) = (target % rows, (target / 8) % cols);
            m.set(i, j, Some(value));

            prop_assert_eq!(
                m.get(i, j),
                Some(value),
                "FALSIFIED MX-003-prop: ({},{}) lost its write (shape {}x{})",
                i, j, rows, cols
            );
            let written: usize = m
                .as_slice()
                .iter()
                .filter(|cell| cell.is_some())
                .count();
            prop_assert_eq!(
                written, 1,
                "FALSIFIED MX-003-prop: one write left {} cells set", written
            );
        }
    }
}
