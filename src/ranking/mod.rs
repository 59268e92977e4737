//! Filtering and ordering of correlation results.
//!
//! Raw correlation maps are noisy: thinly-rated titles reach |rho| = 1.0
//! off two shared raters. The ranking step drops undefined entries, joins
//! in each title's rating count, keeps only titles whose count clears a
//! popularity threshold, and sorts what remains by correlation, strongest
//! first.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use afinidad::dataset::TitledRating;
//! use afinidad::ranking::rank_correlations;
//! use afinidad::summary::SummaryTable;
//!
//! let records = vec![
//!     TitledRating { user_id: 1, item_id: 10, rating: 5.0, timestamp: 0, title: "Alpha".into() },
//!     TitledRating { user_id: 2, item_id: 10, rating: 4.0, timestamp: 0, title: "Alpha".into() },
//! ];
//! let summaries = SummaryTable::from_records(&records);
//!
//! let mut correlations = BTreeMap::new();
//! correlations.insert("Alpha".to_string(), Some(1.0_f32));
//! correlations.insert("Ghost".to_string(), None);
//!
//! let ranked = rank_correlations(&correlations, &summaries, 1);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].title, "Alpha");
//! ```

use std::collections::BTreeMap;

use crate::summary::SummaryTable;

/// One row of the final ranking: a title, its correlation against the
/// reference, and its rating count.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCorrelation {
    pub title: String,
    pub correlation: f32,
    pub num_ratings: usize,
}

/// Filters and sorts a correlation map into the final ranking.
///
/// Three passes, in order:
///
/// 1. undefined correlations (`None`) are dropped;
/// 2. each surviving title is joined with its `num_ratings` from the
///    summary table (titles missing from the table are dropped too);
/// 3. titles with `num_ratings > min_ratings` are kept (strict), then
///    stable-sorted descending by correlation.
///
/// Ties keep the map's alphabetical order, so identical inputs always
/// produce identical output. `min_ratings = 0` keeps every defined
/// correlation with at least one rating.
#[must_use]
pub fn rank_correlations(
    correlations: &BTreeMap<String, Option<f32>>,
    summaries: &SummaryTable,
    min_ratings: usize,
) -> Vec<RankedCorrelation> {
    let mut ranked: Vec<RankedCorrelation> = correlations
        .iter()
        .filter_map(|(title, r)| r.map(|correlation| (title, correlation)))
        .filter_map(|(title, correlation)| {
            summaries.get(title).map(|s| RankedCorrelation {
                title: title.clone(),
                correlation,
                num_ratings: s.num_ratings,
            })
        })
        .filter(|row| row.num_ratings > min_ratings)
        .collect();

    ranked.sort_by(|a, b| {
        b.correlation
            .partial_cmp(&a.correlation)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;
