//! Loading and joining of rating data.
//!
//! Two flat inputs feed the pipeline:
//!
//! - an interaction log: one row per rating event, tab-separated, no header,
//!   columns `[user_id, item_id, rating, timestamp]`;
//! - an item catalog: comma-separated with an `item_id,title` header row.
//!
//! [`RatingsDataset::from_files`] reads both and inner-joins them on
//! `item_id`. Interactions whose item has no catalog entry are dropped
//! silently; the joined record count is therefore at most the interaction
//! count, and [`RatingsDataset::dropped`] reports the difference.
//!
//! # Examples
//!
//! ```
//! use afinidad::dataset::{Interaction, RatingsDataset, TitleRecord};
//!
//! let interactions = vec![
//!     Interaction { user_id: 1, item_id: 10, rating: 5.0, timestamp: 0 },
//!     Interaction { user_id: 2, item_id: 10, rating: 4.0, timestamp: 0 },
//! ];
//! let titles = vec![TitleRecord { item_id: 10, title: "Alpha".to_string() }];
//!
//! let data = RatingsDataset::from_records(interactions, &titles);
//! assert_eq!(data.len(), 2);
//! assert_eq!(data.records()[0].title, "Alpha");
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One rating event: a user rated an item at a point in time.
///
/// Decoded positionally from headerless tab-separated rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: u32,
    pub item_id: u32,
    pub rating: f32,
    pub timestamp: i64,
}

/// One catalog row mapping an item id to its display title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub item_id: u32,
    pub title: String,
}

/// An interaction joined with its catalog title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledRating {
    pub user_id: u32,
    pub item_id: u32,
    pub rating: f32,
    pub timestamp: i64,
    pub title: String,
}

/// Reads the interaction log: tab-separated, no header,
/// columns `[user_id, item_id, rating, timestamp]`.
///
/// # Arguments
///
/// * `path` - Path to the interaction file
///
/// # Errors
///
/// Returns `FormatError` with the 1-based line number for a malformed row,
/// or `Io` if the file cannot be read.
///
/// # Examples
///
/// ```ignore
/// use afinidad::dataset::read_interactions;
///
/// let interactions = read_interactions("data/u.data")?;
/// println!("{} rating events", interactions.len());
/// ```
pub fn read_interactions<P: AsRef<Path>>(path: P) -> Result<Vec<Interaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)?;

    let mut interactions = Vec::new();
    for record in reader.deserialize() {
        let interaction: Interaction = record?;
        interactions.push(interaction);
    }
    Ok(interactions)
}

/// Reads the item catalog: comma-separated with an `item_id,title` header.
///
/// # Arguments
///
/// * `path` - Path to the catalog file
///
/// # Errors
///
/// Returns `FormatError` with the 1-based line number for a malformed row,
/// or `Io` if the file cannot be read.
///
/// # Examples
///
/// ```ignore
/// use afinidad::dataset::read_titles;
///
/// let titles = read_titles("data/Movie_Id_Titles.csv")?;
/// println!("{} catalog items", titles.len());
/// ```
pub fn read_titles<P: AsRef<Path>>(path: P) -> Result<Vec<TitleRecord>> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;

    let mut titles = Vec::new();
    for record in reader.deserialize() {
        let title: TitleRecord = record?;
        titles.push(title);
    }
    Ok(titles)
}

/// The joined rating data: every interaction that matched a catalog title.
///
/// Join policy is a strict inner join on `item_id`. An interaction whose
/// item is missing from the catalog is not an error; it simply does not
/// appear in the joined records.
#[derive(Debug, Clone)]
pub struct RatingsDataset {
    records: Vec<TitledRating>,
    n_interactions: usize,
}

impl RatingsDataset {
    /// Loads and joins the interaction log and item catalog.
    ///
    /// # Arguments
    ///
    /// * `interactions_path` - Tab-separated headerless interaction log
    /// * `titles_path` - Comma-separated item catalog with header
    ///
    /// # Errors
    ///
    /// Returns `FormatError` or `Io` from either file read.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use afinidad::dataset::RatingsDataset;
    ///
    /// let data = RatingsDataset::from_files("data/u.data", "data/Movie_Id_Titles.csv")?;
    /// println!("{} joined records ({} dropped)", data.len(), data.dropped());
    /// ```
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        interactions_path: P,
        titles_path: Q,
    ) -> Result<Self> {
        let interactions = read_interactions(interactions_path)?;
        let titles = read_titles(titles_path)?;
        Ok(Self::from_records(interactions, &titles))
    }

    /// Joins in-memory interactions with a title catalog.
    ///
    /// If the catalog maps one `item_id` twice, the later row wins.
    #[must_use]
    pub fn from_records(interactions: Vec<Interaction>, titles: &[TitleRecord]) -> Self {
        let catalog: BTreeMap<u32, &str> = titles
            .iter()
            .map(|t| (t.item_id, t.title.as_str()))
            .collect();

        let n_interactions = interactions.len();
        let records: Vec<TitledRating> = interactions
            .into_iter()
            .filter_map(|i| {
                catalog.get(&i.item_id).map(|&title| TitledRating {
                    user_id: i.user_id,
                    item_id: i.item_id,
                    rating: i.rating,
                    timestamp: i.timestamp,
                    title: title.to_string(),
                })
            })
            .collect();

        Self {
            records,
            n_interactions,
        }
    }

    /// The joined records, in input order.
    #[must_use]
    pub fn records(&self) -> &[TitledRating] {
        &self.records
    }

    /// Number of joined records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no interaction matched the catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of interactions dropped by the join.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.n_interactions - self.records.len()
    }

    /// Number of interactions read before the join.
    #[must_use]
    pub fn n_interactions(&self) -> usize {
        self.n_interactions
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
