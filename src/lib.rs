//! Afinidad: Item affinity analysis over explicit ratings in pure Rust.
//!
//! Afinidad loads a flat interaction log plus an item catalog, joins them,
//! and answers one question: given a title, which other titles do the same
//! people rate the same way? The pipeline is the classic dense one: per-title
//! rating summaries, a user x title rating matrix, Pearson correlation of a
//! reference column against every column, and a popularity-filtered ranking.
//!
//! # Quick Start
//!
//! ```
//! use afinidad::prelude::*;
//!
//! // Two users rate two titles and agree on both.
//! let interactions = vec![
//!     Interaction { user_id: 1, item_id: 10, rating: 5.0, timestamp: 0 },
//!     Interaction { user_id: 1, item_id: 20, rating: 5.0, timestamp: 1 },
//!     Interaction { user_id: 2, item_id: 10, rating: 4.0, timestamp: 2 },
//!     Interaction { user_id: 2, item_id: 20, rating: 1.0, timestamp: 3 },
//! ];
//! let titles = vec![
//!     TitleRecord { item_id: 10, title: "Alpha".to_string() },
//!     TitleRecord { item_id: 20, title: "Beta".to_string() },
//! ];
//! let data = RatingsDataset::from_records(interactions, &titles);
//!
//! // Fit the pipeline and rank titles by affinity to "Alpha".
//! let mut analysis = AffinityAnalysis::new().with_min_ratings(1);
//! analysis.fit(&data).unwrap();
//!
//! let similar = analysis.similar_to("Alpha").unwrap();
//! assert_eq!(similar[0].title, "Alpha");
//! assert_eq!(similar[1].title, "Beta");
//! assert!((similar[1].correlation - 1.0).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`dataset`]: Interaction log and item catalog loading, inner join
//! - [`summary`]: Per-title mean rating and rating count aggregation
//! - [`pivot`]: User x title rating matrix with absent cells
//! - [`similarity`]: Pearson correlation, dense and pairwise-complete
//! - [`ranking`]: Popularity-filtered affinity ranking
//! - [`stats`]: Descriptive statistics and histograms
//! - [`report`]: Text rendering for tables, histograms, and scatter extents
//! - [`pipeline`]: One-shot affinity analysis over a ratings dataset
//! - [`synthetic`]: Synthetic ratings generation for examples and benches

pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod pivot;
pub mod prelude;
pub mod primitives;
pub mod ranking;
pub mod report;
pub mod similarity;
pub mod stats;
pub mod summary;
pub mod synthetic;

pub use error::{AfinidadError, Result};
pub use pipeline::AffinityAnalysis;
pub use primitives::{Matrix, Vector};
