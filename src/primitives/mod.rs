//! Core data primitives (Vector, Matrix).
//!
//! These types carry the numeric payloads for the affinity pipeline:
//! dense `Vector<f32>` columns for summary statistics and a sparse-by-absence
//! `Matrix<Option<f32>>` for the user-by-title rating grid.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
