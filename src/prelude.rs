//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use afinidad::prelude::*;
//! ```

pub use crate::primitives::{Matrix, Vector};
pub use crate::dataset::{Interaction, RatingsDataset, TitleRecord, TitledRating};
pub use crate::summary::{RatingSummary, SummaryTable};
pub use crate::pivot::RatingMatrix;
pub use crate::similarity::{correlate_with, pearson, pearson_pairwise};
pub use crate::ranking::{rank_correlations, RankedCorrelation};
pub use crate::pipeline::AffinityAnalysis;
pub use crate::stats::{DescriptiveStats, Histogram};
pub use crate::report::{PlotSurface, TextSurface};
pub use crate::error::{AfinidadError, Result};
