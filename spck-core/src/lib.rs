#![no_std]

//! SPCK Core - Sparse GF(2) Parity-Check Matrix Definitions
//!
//! This crate provides the data structures and algorithms for reducing a
//! sparse binary parity-check matrix to row-reduced systematic form: the
//! dual row/column adjacency representation, view converters, the pivot
//! elimination engine, the rank-deficiency resolver and the column
//! permuter. It performs no I/O and draws no randomness; matrix
//! generation and persistence live in the `spck` crate.

extern crate alloc;

use alloc::vec::Vec;

pub mod eliminate;
pub mod error;
pub mod matrix;
pub mod permute;
pub mod resolve;
pub mod validation;

pub use eliminate::*;
pub use error::*;
pub use matrix::*;
pub use permute::*;
pub use resolve::*;
pub use validation::*;

/// Core binary matrix trait for representation-agnostic access
pub trait BinaryMatrix {
    /// Whether the entry at the specified position is 1
    ///
    /// Returns `false` for positions out of bounds.
    fn contains(&self, row: usize, col: usize) -> bool;

    /// Matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of 1-entries
    fn weight(&self) -> usize;
}

/// Extension trait for row/column support access
pub trait BinaryMatrixOps: BinaryMatrix {
    /// Column indices of the 1-entries in a row, ascending
    fn row_support(&self, row: usize) -> Vec<usize>;

    /// Row indices of the 1-entries in a column, ascending
    fn col_support(&self, col: usize) -> Vec<usize>;
}
