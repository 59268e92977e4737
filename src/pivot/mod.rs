//! User-by-title rating matrix.
//!
//! Pivots the joined record stream into a 2D table: one row per user, one
//! column per title, cell holding `Some(rating)` where that user rated that
//! title and `None` where they did not. Absence is data here; the
//! correlation step restricts itself to pairwise-complete rows.
//!
//! Rows are sorted unique user ids and columns are sorted titles, so the
//! same records always produce the same matrix.
//!
//! # Examples
//!
//! ```
//! use afinidad::dataset::TitledRating;
//! use afinidad::pivot::RatingMatrix;
//!
//! let records = vec![
//!     TitledRating { user_id: 1, item_id: 10, rating: 5.0, timestamp: 0, title: "Alpha".into() },
//!     TitledRating { user_id: 2, item_id: 10, rating: 4.0, timestamp: 0, title: "Alpha".into() },
//!     TitledRating { user_id: 1, item_id: 20, rating: 5.0, timestamp: 0, title: "Beta".into() },
//! ];
//!
//! let matrix = RatingMatrix::from_records(&records);
//! assert_eq!(matrix.n_users(), 2);
//! assert_eq!(matrix.n_titles(), 2);
//! assert_eq!(matrix.get(0, 0), Some(5.0));   // user 1, Alpha
//! assert_eq!(matrix.get(1, 1), None);        // user 2 never rated Beta
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::dataset::TitledRating;
use crate::error::{AfinidadError, Result};
use crate::primitives::{Matrix, Vector};

/// The pivoted rating table: users as rows, titles as columns.
#[derive(Debug, Clone)]
pub struct RatingMatrix {
    cells: Matrix<Option<f32>>,
    user_ids: Vec<u32>,
    titles: Vec<String>,
    title_index: BTreeMap<String, usize>,
}

impl RatingMatrix {
    /// Pivots joined records into the user-by-title grid.
    ///
    /// If the stream carries two ratings for the same (user, title) cell,
    /// the later record wins.
    #[must_use]
    pub fn from_records(records: &[TitledRating]) -> Self {
        let user_set: BTreeSet<u32> = records.iter().map(|r| r.user_id).collect();
        let title_set: BTreeSet<&str> = records.iter().map(|r| r.title.as_str()).collect();

        let user_ids: Vec<u32> = user_set.into_iter().collect();
        let titles: Vec<String> = title_set.into_iter().map(str::to_string).collect();

        let user_index: BTreeMap<u32, usize> = user_ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();
        let title_index: BTreeMap<String, usize> = titles
            .iter()
            .enumerate()
            .map(|(idx, t)| (t.clone(), idx))
            .collect();

        let mut cells = Matrix::filled(user_ids.len(), titles.len(), None);
        for record in records {
            let row = user_index[&record.user_id];
            let col = title_index[&record.title];
            cells.set(row, col, Some(record.rating));
        }

        Self {
            cells,
            user_ids,
            titles,
            title_index,
        }
    }

    /// Number of distinct users (rows).
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.user_ids.len()
    }

    /// Number of distinct titles (columns).
    #[must_use]
    pub fn n_titles(&self) -> usize {
        self.titles.len()
    }

    /// Sorted user ids, one per row.
    #[must_use]
    pub fn user_ids(&self) -> &[u32] {
        &self.user_ids
    }

    /// Sorted titles, one per column.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Cell at (user row, title column).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, user_row: usize, title_col: usize) -> Option<f32> {
        self.cells.get(user_row, title_col)
    }

    /// Column index for a title, if present.
    #[must_use]
    pub fn column_index(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// One title's ratings across all users, `None` where unrated.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` if the title has no column.
    pub fn column(&self, title: &str) -> Result<Vector<Option<f32>>> {
        let col = self
            .column_index(title)
            .ok_or_else(|| AfinidadError::MissingColumn {
                title: title.to_string(),
            })?;
        Ok(self.cells.column(col))
    }

    /// Column by position.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn column_at(&self, title_col: usize) -> Vector<Option<f32>> {
        self.cells.column(title_col)
    }

    /// Number of users who rated a title. Zero if the title is absent.
    #[must_use]
    pub fn rated_count(&self, title: &str) -> usize {
        match self.column_index(title) {
            Some(col) => self
                .cells
                .column(col)
                .iter()
                .filter(|cell| cell.is_some())
                .count(),
            None => 0,
        }
    }
}

#[cfg(test)]
#[path = "pivot_tests.rs"]
mod tests;
