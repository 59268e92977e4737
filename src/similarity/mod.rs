//! Pearson correlation between rating columns.
//!
//! # Mathematical Background
//!
//! Pearson correlation normalizes covariance to [-1, 1]:
//!
//! ```text
//! ρ(X, Y) = Cov(X, Y) / (σ_X σ_Y)
//!         = Σ (x_i - x̄)(y_i - ȳ) / sqrt(Σ (x_i - x̄)² · Σ (y_i - ȳ)²)
//! ```
//!
//! Rating columns are riddled with holes: most users never rated most
//! titles. Correlation between two columns is therefore computed over the
//! **pairwise-complete** rows, the users who rated both titles. When that
//! overlap has fewer than 2 users, or either side of it never varies, the
//! coefficient does not exist. That outcome is data, not a failure:
//! [`pearson_pairwise`] returns `None` and the ranking step filters it out.
//!
//! [`pearson`] is the strict complete-case variant for callers that hold
//! two fully-observed vectors and want an error instead.
//!
//! # Examples
//!
//! ```
//! use afinidad::similarity::{pearson, pearson_pairwise};
//! use afinidad::primitives::Vector;
//!
//! let x = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
//! let y = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0]);
//! let r = pearson(&x, &y).expect("complete vectors with variance");
//! assert!((r - 1.0).abs() < 1e-6);
//!
//! // Only rows where both sides are present count.
//! let a = [Some(5.0_f32), Some(4.0), None, Some(1.0)];
//! let b = [Some(5.0_f32), None, Some(3.0), Some(2.0)];
//! let r = pearson_pairwise(&a, &b).expect("two complete pairs with variance");
//! assert!((r - 1.0).abs() < 1e-6);
//! ```

use std::collections::BTreeMap;

use crate::error::{AfinidadError, Result};
use crate::pivot::RatingMatrix;
use crate::primitives::Vector;

/// Standard deviations below this floor count as zero variance.
const STD_FLOOR: f32 = 1e-10;

/// Computes the Pearson correlation coefficient between two complete vectors.
///
/// # Arguments
///
/// * `x` - First variable (n values)
/// * `y` - Second variable (n values)
///
/// # Returns
///
/// Pearson correlation in [-1, 1].
///
/// # Errors
///
/// Returns error if vectors have different lengths, are empty, or have zero
/// variance.
///
/// # Examples
///
/// ```
/// use afinidad::similarity::pearson;
/// use afinidad::primitives::Vector;
///
/// let x = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
/// let y = Vector::from_slice(&[8.0, 6.0, 4.0, 2.0]);
///
/// let r = pearson(&x, &y).expect("Should compute correlation");
/// assert!((r + 1.0).abs() < 1e-6); // Perfect negative correlation
/// ```
pub fn pearson(x: &Vector<f32>, y: &Vector<f32>) -> Result<f32> {
    let n = x.len();

    if n != y.len() {
        return Err(AfinidadError::DimensionMismatch {
            expected: format!("{n} values in x"),
            actual: format!("{} values in y", y.len()),
        });
    }

    if n == 0 {
        return Err(AfinidadError::Other(
            "Cannot compute correlation of empty vectors".into(),
        ));
    }

    // Compute means
    let x_mean = x.as_slice().iter().sum::<f32>() / n as f32;
    let y_mean = y.as_slice().iter().sum::<f32>() / n as f32;

    // Compute covariance and variances
    let mut cov_sum = 0.0;
    let mut x_var_sum = 0.0;
    let mut y_var_sum = 0.0;

    for (&xi, &yi) in x.as_slice().iter().zip(y.as_slice().iter()) {
        let x_diff = xi - x_mean;
        let y_diff = yi - y_mean;
        cov_sum += x_diff * y_diff;
        x_var_sum += x_diff * x_diff;
        y_var_sum += y_diff * y_diff;
    }

    let x_std = (x_var_sum / n as f32).sqrt();
    let y_std = (y_var_sum / n as f32).sqrt();

    if x_std < STD_FLOOR || y_std < STD_FLOOR {
        return Err(AfinidadError::Other(
            "Cannot compute correlation when variance is zero".into(),
        ));
    }

    let covariance = cov_sum / n as f32;
    Ok(covariance / (x_std * y_std))
}

/// Pearson correlation over pairwise-complete observations.
///
/// Positions where either side is `None` are skipped. Returns `None`, not
/// an error, when the coefficient is undefined:
///
/// - fewer than 2 positions have values on both sides;
/// - the overlap values never vary on either side;
/// - the arithmetic produces a non-finite value.
///
/// # Examples
///
/// ```
/// use afinidad::similarity::pearson_pairwise;
///
/// // One shared rater is not enough to correlate.
/// let a = [Some(5.0_f32), Some(3.0), None];
/// let b = [Some(4.0_f32), None, Some(2.0)];
/// assert_eq!(pearson_pairwise(&a, &b), None);
/// ```
#[must_use]
pub fn pearson_pairwise(x: &[Option<f32>], y: &[Option<f32>]) -> Option<f32> {
    let pairs: Vec<(f32, f32)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(xi, yi)| match (xi, yi) {
            (Some(a), Some(b)) => Some((*a, *b)),
            _ => None,
        })
        .collect();

    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let x_mean = pairs.iter().map(|(a, _)| a).sum::<f32>() / n as f32;
    let y_mean = pairs.iter().map(|(_, b)| b).sum::<f32>() / n as f32;

    let mut cov_sum = 0.0;
    let mut x_var_sum = 0.0;
    let mut y_var_sum = 0.0;

    for &(a, b) in &pairs {
        let x_diff = a - x_mean;
        let y_diff = b - y_mean;
        cov_sum += x_diff * y_diff;
        x_var_sum += x_diff * x_diff;
        y_var_sum += y_diff * y_diff;
    }

    let x_std = (x_var_sum / n as f32).sqrt();
    let y_std = (y_var_sum / n as f32).sqrt();

    if x_std < STD_FLOOR || y_std < STD_FLOOR {
        return None;
    }

    let r = (cov_sum / n as f32) / (x_std * y_std);
    if r.is_finite() {
        Some(r)
    } else {
        None
    }
}

/// Correlates one reference title's column against every column.
///
/// The result has one entry per title in the matrix, the reference
/// included; a well-populated reference correlates with itself at ~1.0.
/// Undefined coefficients appear as `None`.
///
/// # Arguments
///
/// * `matrix` - The pivoted user-by-title ratings
/// * `reference` - Title whose column anchors the comparison
///
/// # Errors
///
/// Returns `MissingColumn` if the reference title has no column.
///
/// # Examples
///
/// ```
/// use afinidad::dataset::TitledRating;
/// use afinidad::pivot::RatingMatrix;
/// use afinidad::similarity::correlate_with;
///
/// let records = vec![
///     TitledRating { user_id: 1, item_id: 10, rating: 5.0, timestamp: 0, title: "Alpha".into() },
///     TitledRating { user_id: 2, item_id: 10, rating: 4.0, timestamp: 0, title: "Alpha".into() },
///     TitledRating { user_id: 1, item_id: 20, rating: 5.0, timestamp: 0, title: "Beta".into() },
///     TitledRating { user_id: 2, item_id: 20, rating: 1.0, timestamp: 0, title: "Beta".into() },
/// ];
/// let matrix = RatingMatrix::from_records(&records);
///
/// let correlations = correlate_with(&matrix, "Alpha").expect("Alpha exists");
/// let beta = correlations["Beta"].expect("two shared raters with variance");
/// assert!((beta - 1.0).abs() < 1e-6);
/// ```
pub fn correlate_with(
    matrix: &RatingMatrix,
    reference: &str,
) -> Result<BTreeMap<String, Option<f32>>> {
    let reference_column = matrix.column(reference)?;

    let mut correlations = BTreeMap::new();
    for (idx, title) in matrix.titles().iter().enumerate() {
        let candidate = matrix.column_at(idx);
        let r = pearson_pairwise(reference_column.as_slice(), candidate.as_slice());
        correlations.insert(title.clone(), r);
    }
    Ok(correlations)
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_similarity_contract.rs"]
mod tests_similarity_contract;
