//! Per-title rating aggregates.
//!
//! Groups joined records by title and reduces each group to its mean rating
//! and rating count. The count later doubles as the popularity signal that
//! filters out titles with too few ratings to correlate meaningfully.
//!
//! # Examples
//!
//! ```
//! use afinidad::dataset::TitledRating;
//! use afinidad::summary::SummaryTable;
//!
//! let records = vec![
//!     TitledRating { user_id: 1, item_id: 10, rating: 5.0, timestamp: 0, title: "Alpha".into() },
//!     TitledRating { user_id: 2, item_id: 10, rating: 3.0, timestamp: 0, title: "Alpha".into() },
//! ];
//!
//! let table = SummaryTable::from_records(&records);
//! let alpha = table.get("Alpha").expect("Alpha was rated");
//! assert!((alpha.mean_rating - 4.0).abs() < 1e-6);
//! assert_eq!(alpha.num_ratings, 2);
//! ```

use std::collections::BTreeMap;

use crate::dataset::TitledRating;
use crate::primitives::Vector;

/// Aggregate over all ratings a title received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// Arithmetic mean of the title's ratings
    pub mean_rating: f32,
    /// How many ratings the title received
    pub num_ratings: usize,
}

/// Per-title summaries in deterministic alphabetical order.
#[derive(Debug, Clone, Default)]
pub struct SummaryTable {
    entries: BTreeMap<String, RatingSummary>,
}

impl SummaryTable {
    /// Groups records by title and computes mean rating and count.
    ///
    /// The mean is taken over every record in the stream, so a user who
    /// rated the same title twice contributes twice.
    #[must_use]
    pub fn from_records(records: &[TitledRating]) -> Self {
        let mut sums: BTreeMap<&str, (f32, usize)> = BTreeMap::new();
        for record in records {
            let entry = sums.entry(record.title.as_str()).or_insert((0.0, 0));
            entry.0 += record.rating;
            entry.1 += 1;
        }

        let entries = sums
            .into_iter()
            .map(|(title, (sum, count))| {
                (
                    title.to_string(),
                    RatingSummary {
                        mean_rating: sum / count as f32,
                        num_ratings: count,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    /// Looks up one title's summary.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&RatingSummary> {
        self.entries.get(title)
    }

    /// Number of distinct titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no records were aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates titles alphabetically with their summaries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RatingSummary)> {
        self.entries.iter().map(|(title, s)| (title.as_str(), s))
    }

    /// Titles sorted by mean rating, descending. Ties stay alphabetical.
    #[must_use]
    pub fn sorted_by_mean(&self) -> Vec<(&str, &RatingSummary)> {
        let mut rows: Vec<(&str, &RatingSummary)> = self.iter().collect();
        rows.sort_by(|a, b| {
            b.1.mean_rating
                .partial_cmp(&a.1.mean_rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows
    }

    /// Titles sorted by rating count, descending. Ties stay alphabetical.
    #[must_use]
    pub fn sorted_by_count(&self) -> Vec<(&str, &RatingSummary)> {
        let mut rows: Vec<(&str, &RatingSummary)> = self.iter().collect();
        rows.sort_by(|a, b| b.1.num_ratings.cmp(&a.1.num_ratings));
        rows
    }

    /// Rating counts as a numeric series, alphabetical title order.
    #[must_use]
    pub fn rating_counts(&self) -> Vector<f32> {
        Vector::from_vec(
            self.entries
                .values()
                .map(|s| s.num_ratings as f32)
                .collect(),
        )
    }

    /// Mean ratings as a numeric series, alphabetical title order.
    #[must_use]
    pub fn mean_ratings(&self) -> Vector<f32> {
        Vector::from_vec(self.entries.values().map(|s| s.mean_rating).collect())
    }

    /// (mean rating, rating count) pairs, alphabetical title order.
    ///
    /// The joint series behind the mean-versus-popularity scatter view.
    #[must_use]
    pub fn mean_vs_count(&self) -> Vec<(f32, f32)> {
        self.entries
            .values()
            .map(|s| (s.mean_rating, s.num_ratings as f32))
            .collect()
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
