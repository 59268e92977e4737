//! Descriptive distribution support for rating series.
//!
//! The summary stage produces numeric series (rating counts per title,
//! mean ratings per title); this module bins them into histograms for the
//! plotting surface.
//!
//! # Examples
//!
//! ```
//! use afinidad::stats::DescriptiveStats;
//! use afinidad::primitives::Vector;
//!
//! let data = Vector::from_slice(&[1.0, 2.0, 2.5, 4.0, 5.0]);
//! let stats = DescriptiveStats::new(&data);
//!
//! let hist = stats.histogram(4).expect("non-empty data, positive bin count");
//! assert_eq!(hist.bins.len(), 5); // n_bins + 1 edges
//! assert_eq!(hist.counts.iter().sum::<usize>(), 5);
//! ```

use crate::error::{AfinidadError, Result};
use crate::primitives::Vector;

/// Equal-width histogram: `bins` holds the edges, `counts` the bucket totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bucket edges, one more than the bucket count.
    pub bins: Vec<f32>,
    /// Values per bucket.
    pub counts: Vec<usize>,
}

/// Distribution views over a borrowed numeric series.
#[derive(Debug)]
pub struct DescriptiveStats<'a> {
    data: &'a Vector<f32>,
}

impl<'a> DescriptiveStats<'a> {
    /// Wraps `data` without copying it.
    #[must_use]
    pub fn new(data: &'a Vector<f32>) -> Self {
        Self { data }
    }

    /// Bins the series into `n_bins` equal-width buckets over `[min, max]`.
    ///
    /// Buckets are half-open `[edge_i, edge_i+1)` except the last, which also
    /// takes values equal to the maximum. When every value is identical the
    /// histogram degenerates to a single bucket holding everything.
    ///
    /// # Arguments
    ///
    /// * `n_bins` - How many buckets to produce (must be >= 1)
    ///
    /// # Errors
    ///
    /// Returns error if the data is empty or `n_bins` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use afinidad::stats::DescriptiveStats;
    /// use afinidad::primitives::Vector;
    ///
    /// let data = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// let stats = DescriptiveStats::new(&data);
    /// let hist = stats.histogram(3).expect("non-empty data, positive bin count");
    /// assert_eq!(hist.bins.len(), 4);
    /// assert_eq!(hist.counts.len(), 3);
    /// ```
    pub fn histogram(&self, n_bins: usize) -> Result<Histogram> {
        if self.data.is_empty() {
            return Err("Histogram requires a non-empty series".into());
        }
        if n_bins == 0 {
            return Err("Histogram requires at least one bin".into());
        }

        let lo = self.data.min().map_err(AfinidadError::from)?;
        let hi = self.data.max().map_err(AfinidadError::from)?;

        // Constant series: a single bucket holds every value.
        if lo == hi {
            return Ok(Histogram {
                bins: vec![lo, hi],
                counts: vec![self.data.len()],
            });
        }

        let width = (hi - lo) / n_bins as f32;
        let bins: Vec<f32> = (0..=n_bins).map(|i| lo + i as f32 * width).collect();

        let mut counts = vec![0usize; n_bins];
        for &value in self.data.as_slice() {
            // The maximum itself closes the last bucket.
            let bucket = (((value - lo) / width) as usize).min(n_bins - 1);
            counts[bucket] += 1;
        }

        Ok(Histogram { bins, counts })
    }

    /// Bins the series with the bucket count chosen by the Sturges rule:
    /// `n_bins = ceil(log2(n)) + 1`.
    ///
    /// # Errors
    ///
    /// Returns error if the data is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use afinidad::stats::DescriptiveStats;
    /// use afinidad::primitives::Vector;
    ///
    /// let data = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    /// let stats = DescriptiveStats::new(&data);
    /// let hist = stats.histogram_auto().expect("non-empty data");
    /// assert_eq!(hist.counts.len(), 4); // ceil(log2(8)) + 1
    /// ```
    pub fn histogram_auto(&self) -> Result<Histogram> {
        if self.data.is_empty() {
            return Err("Histogram requires a non-empty series".into());
        }

        let n = self.data.len() as f64;
        let n_bins = (n.log2().ceil() as usize + 1).max(1);
        self.histogram(n_bins)
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
