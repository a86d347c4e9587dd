//! Rank-deficiency resolution
//!
//! After elimination some rows may have reduced to all-zero (redundant
//! GF(2) combinations of earlier rows) and some columns may carry no
//! entry at all, so no parity check would constrain them. The resolver
//! drops the former and covers the latter with synthetic unit rows, so
//! the surviving matrix spans all n columns and every row has a pivot.

use alloc::{vec, vec::Vec};

use crate::error::{Result, SpckError};
use crate::matrix::SparseBinMatrix;

/// Patch the row set and pivot assignment after elimination.
///
/// Rows whose pivot is `None` are removed (they contribute no rank);
/// then one synthetic single-entry row is appended per column that has
/// no remaining 1, in ascending column order, with that column as its
/// pivot. Returns the completed assignment, aligned with the surviving
/// rows, and rebuilds the column view.
///
/// The assignment must have one slot per row of `matrix`, and `None`
/// rows must actually be empty; anything else is a [`SpckError::PivotMismatch`].
pub fn resolve(pivots: &[Option<usize>], matrix: &mut SparseBinMatrix) -> Result<Vec<usize>> {
    let n = matrix.col_count();
    if pivots.len() != matrix.row_count() {
        return Err(SpckError::PivotMismatch);
    }
    // Zero columns are invariant under row additions, so these are
    // exactly the columns the input matrix never constrained.
    let uncovered: Vec<usize> = (0..n).filter(|&j| matrix.col(j).is_empty()).collect();

    // Validate before touching anything, so an error leaves the matrix
    // exactly as elimination left it.
    for (row, pivot) in matrix.rows().iter().zip(pivots) {
        match pivot {
            Some(p) => {
                if *p >= n || row.binary_search(p).is_err() {
                    return Err(SpckError::PivotMismatch);
                }
            }
            None => {
                if !row.is_empty() {
                    return Err(SpckError::PivotMismatch);
                }
            }
        }
    }

    let (rows, _) = matrix.views_mut();
    let mut kept_rows = Vec::with_capacity(rows.len() + uncovered.len());
    let mut complete = Vec::with_capacity(rows.len() + uncovered.len());
    for (row, pivot) in rows.drain(..).zip(pivots) {
        if let Some(p) = pivot {
            kept_rows.push(row);
            complete.push(*p);
        }
    }
    for &j in &uncovered {
        kept_rows.push(vec![j]);
        complete.push(j);
    }
    *rows = kept_rows;
    matrix.rebuild_columns();
    Ok(complete)
}
