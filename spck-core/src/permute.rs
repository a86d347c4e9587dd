//! Column permutation into systematic form
//!
//! The last pipeline stage: once every surviving row has a distinct
//! pivot column, reordering the columns so each pivot lands on the
//! diagonal produces the [I | P] shape that systematic encoding needs.

use alloc::{vec, vec::Vec};
use core::mem;

use crate::eliminate::find_pivots;
use crate::error::{Result, SpckError};
use crate::matrix::{columns_from_rows, rows_from_columns, SparseBinMatrix};
use crate::resolve::resolve;

/// Reorder columns so that row `i`'s pivot column occupies position `i`.
///
/// The permuted order is the m pivot columns in row order followed by
/// the non-pivot columns in their original relative order. The column
/// view is rebuilt from `rows`, permuted, and converted back, so the
/// result is a freshly built row view. `pivots` must assign a distinct
/// in-range column to every row.
pub fn permute_columns(rows: &[Vec<usize>], pivots: &[usize], n: usize) -> Result<Vec<Vec<usize>>> {
    let m = rows.len();
    if pivots.len() != m {
        return Err(SpckError::PivotMismatch);
    }
    let mut is_pivot = vec![false; n];
    for &p in pivots {
        if p >= n {
            return Err(SpckError::IndexOutOfBounds);
        }
        if is_pivot[p] {
            return Err(SpckError::PivotMismatch);
        }
        is_pivot[p] = true;
    }
    let mut cols = columns_from_rows(rows, n);
    let mut permuted = Vec::with_capacity(n);
    for &p in pivots {
        permuted.push(mem::take(&mut cols[p]));
    }
    for (j, col) in cols.into_iter().enumerate() {
        if !is_pivot[j] {
            permuted.push(col);
        }
    }
    Ok(rows_from_columns(&permuted, m))
}

/// Resolve rank deficiencies and permute into systematic form.
///
/// Consumes the elimination result: patches the row set (dropping
/// redundant rows, covering unconstrained columns) and returns the
/// final systematic matrix. `matrix` is left holding the patched,
/// unpermuted rows.
pub fn resolve_and_permute(
    pivots: &[Option<usize>],
    matrix: &mut SparseBinMatrix,
) -> Result<SparseBinMatrix> {
    let n = matrix.col_count();
    let complete = resolve(pivots, matrix)?;
    let rows = permute_columns(matrix.rows(), &complete, n)?;
    SparseBinMatrix::from_rows(rows, n)
}

/// Full pipeline: eliminate, resolve, permute.
pub fn systematic_form(matrix: &mut SparseBinMatrix) -> Result<SparseBinMatrix> {
    let pivots = find_pivots(matrix);
    resolve_and_permute(&pivots, matrix)
}
