//! One-shot orchestration of the affinity pipeline.
//!
//! [`AffinityAnalysis`] walks the whole flow once: joined records go in,
//! the per-title summary and the user-by-title matrix are built at fit
//! time, and any number of reference titles can then be queried for their
//! ranked look-alikes.
//!
//! # Examples
//!
//! ```
//! use afinidad::dataset::{Interaction, RatingsDataset, TitleRecord};
//! use afinidad::pipeline::AffinityAnalysis;
//!
//! let interactions = vec![
//!     Interaction { user_id: 1, item_id: 10, rating: 5.0, timestamp: 0 },
//!     Interaction { user_id: 2, item_id: 10, rating: 4.0, timestamp: 0 },
//!     Interaction { user_id: 1, item_id: 20, rating: 5.0, timestamp: 0 },
//!     Interaction { user_id: 2, item_id: 20, rating: 1.0, timestamp: 0 },
//! ];
//! let titles = vec![
//!     TitleRecord { item_id: 10, title: "Alpha".to_string() },
//!     TitleRecord { item_id: 20, title: "Beta".to_string() },
//! ];
//! let data = RatingsDataset::from_records(interactions, &titles);
//!
//! let mut analysis = AffinityAnalysis::new().with_min_ratings(1);
//! analysis.fit(&data).expect("non-empty dataset");
//!
//! let similar = analysis.similar_to("Alpha").expect("Alpha exists");
//! // Both titles clear the threshold and correlate at 1.0 with Alpha;
//! // the tie resolves alphabetically.
//! assert_eq!(similar[0].title, "Alpha");
//! assert_eq!(similar[1].title, "Beta");
//! assert!((similar[1].correlation - 1.0).abs() < 1e-6);
//! ```

use crate::dataset::RatingsDataset;
use crate::error::{AfinidadError, Result};
use crate::pivot::RatingMatrix;
use crate::ranking::{rank_correlations, RankedCorrelation};
use crate::similarity::correlate_with;
use crate::summary::SummaryTable;

#[derive(Debug, Clone)]
struct Fitted {
    summary: SummaryTable,
    matrix: RatingMatrix,
}

/// The full pipeline as a fit-once, query-many estimator.
#[derive(Debug, Clone)]
pub struct AffinityAnalysis {
    min_ratings: usize,
    fitted: Option<Fitted>,
}

impl Default for AffinityAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl AffinityAnalysis {
    /// Creates an unfitted analysis with no popularity threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_ratings: 0,
            fitted: None,
        }
    }

    /// Sets the popularity threshold: ranked results keep only titles with
    /// strictly more than `min_ratings` ratings.
    #[must_use]
    pub fn with_min_ratings(mut self, min_ratings: usize) -> Self {
        self.min_ratings = min_ratings;
        self
    }

    /// The configured popularity threshold.
    #[must_use]
    pub fn min_ratings(&self) -> usize {
        self.min_ratings
    }

    /// Builds the summary table and rating matrix from joined records.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset has no joined records.
    pub fn fit(&mut self, data: &RatingsDataset) -> Result<()> {
        if data.is_empty() {
            return Err(AfinidadError::empty_input("joined rating records"));
        }

        self.fitted = Some(Fitted {
            summary: SummaryTable::from_records(data.records()),
            matrix: RatingMatrix::from_records(data.records()),
        });
        Ok(())
    }

    /// Returns true once `fit` has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn fitted(&self) -> Result<&Fitted> {
        self.fitted
            .as_ref()
            .ok_or_else(|| AfinidadError::Other("Pipeline not fitted. Call fit() first.".into()))
    }

    /// The fitted per-title summary table.
    ///
    /// # Errors
    ///
    /// Returns an error if `fit` has not run.
    pub fn summary(&self) -> Result<&SummaryTable> {
        Ok(&self.fitted()?.summary)
    }

    /// The fitted user-by-title rating matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `fit` has not run.
    pub fn matrix(&self) -> Result<&RatingMatrix> {
        Ok(&self.fitted()?.matrix)
    }

    /// Ranks every title by its correlation with the reference title.
    ///
    /// Correlates the reference column against all columns over
    /// pairwise-complete users, drops undefined results, applies the
    /// popularity threshold, and sorts descending by correlation.
    ///
    /// # Errors
    ///
    /// Returns an error if `fit` has not run, or `MissingColumn` if the
    /// reference title was never rated.
    pub fn similar_to(&self, title: &str) -> Result<Vec<RankedCorrelation>> {
        let fitted = self.fitted()?;
        let correlations = correlate_with(&fitted.matrix, title)?;
        Ok(rank_correlations(
            &correlations,
            &fitted.summary,
            self.min_ratings,
        ))
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
