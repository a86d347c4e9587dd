//! Dual-view sparse binary matrix
//!
//! A GF(2) matrix of m rows (check nodes) by n columns (variable nodes),
//! stored simultaneously as row adjacency (row index -> sorted column
//! indices of the 1-entries) and column adjacency (column index -> sorted
//! row indices). Row `i` lists column `j` iff column `j` lists row `i`;
//! mutation goes through whole-row or whole-view operations only, so the
//! two views cannot drift apart behind the caller's back.

use alloc::{vec, vec::Vec};

use crate::error::{Result, SpckError};
use crate::validation::validate_dual_views;
use crate::{BinaryMatrix, BinaryMatrixOps};

/// Build the column view of an m x n matrix from its row view.
///
/// One scatter pass followed by an ascending sort of every column list.
/// Input lists may be in any order; the output is fully dual-consistent
/// with the input. The input is not modified.
pub fn columns_from_rows(rows: &[Vec<usize>], n: usize) -> Vec<Vec<usize>> {
    let mut cols = vec![Vec::new(); n];
    for (i, row) in rows.iter().enumerate() {
        for &j in row {
            cols[j].push(i);
        }
    }
    for col in &mut cols {
        col.sort_unstable();
    }
    cols
}

/// Build the row view of an m x n matrix from its column view.
///
/// Dual of [`columns_from_rows`].
pub fn rows_from_columns(cols: &[Vec<usize>], m: usize) -> Vec<Vec<usize>> {
    let mut rows = vec![Vec::new(); m];
    for (j, col) in cols.iter().enumerate() {
        for &i in col {
            rows[i].push(j);
        }
    }
    for row in &mut rows {
        row.sort_unstable();
    }
    rows
}

/// Insert `value` into a sorted list, keeping it sorted; no-op if present.
pub(crate) fn insert_sorted(list: &mut Vec<usize>, value: usize) {
    if let Err(pos) = list.binary_search(&value) {
        list.insert(pos, value);
    }
}

/// Remove `value` from a sorted list; no-op if absent.
pub(crate) fn remove_sorted(list: &mut Vec<usize>, value: usize) {
    if let Ok(pos) = list.binary_search(&value) {
        list.remove(pos);
    }
}

/// Sparse binary matrix with mutually consistent row and column views
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseBinMatrix {
    rows: Vec<Vec<usize>>,
    cols: Vec<Vec<usize>>,
    col_count: usize,
}

impl SparseBinMatrix {
    /// Create a matrix from a row view with `n` columns.
    ///
    /// Each row is sorted and duplicate indices are collapsed to a single
    /// entry; the column view is built from scratch. Fails if any column
    /// index is `n` or larger.
    pub fn from_rows(mut rows: Vec<Vec<usize>>, n: usize) -> Result<Self> {
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
            if row.last().is_some_and(|&j| j >= n) {
                return Err(SpckError::IndexOutOfBounds);
            }
        }
        let cols = columns_from_rows(&rows, n);
        Ok(Self {
            rows,
            cols,
            col_count: n,
        })
    }

    /// Create a matrix from externally built row and column views.
    ///
    /// The views are checked for full dual consistency (sortedness, no
    /// duplicates, bounds, and the duality invariant) and rejected if they
    /// disagree; callers holding only one trusted view should use
    /// [`SparseBinMatrix::from_rows`] instead.
    pub fn from_views(rows: Vec<Vec<usize>>, cols: Vec<Vec<usize>>) -> Result<Self> {
        validate_dual_views(&rows, &cols)?;
        let col_count = cols.len();
        Ok(Self {
            rows,
            cols,
            col_count,
        })
    }

    /// Number of rows (check nodes)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (variable nodes)
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Sorted column indices of the 1-entries in row `i`
    pub fn row(&self, i: usize) -> &[usize] {
        &self.rows[i]
    }

    /// Sorted row indices of the 1-entries in column `j`
    pub fn col(&self, j: usize) -> &[usize] {
        &self.cols[j]
    }

    /// The full row view
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// The full column view
    pub fn cols(&self) -> &[Vec<usize>] {
        &self.cols
    }

    /// Consume the matrix, returning the row view
    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }

    /// Rebuild the column view from the row view, restoring full duality
    pub fn rebuild_columns(&mut self) {
        self.cols = columns_from_rows(&self.rows, self.col_count);
    }

    /// Whether the two views currently satisfy the duality invariant
    pub fn is_dual_consistent(&self) -> bool {
        validate_dual_views(&self.rows, &self.cols).is_ok()
    }

    /// Mutable access to both views at once, for in-place elimination.
    ///
    /// Callers must restore duality before the structure is next read.
    pub(crate) fn views_mut(&mut self) -> (&mut Vec<Vec<usize>>, &mut Vec<Vec<usize>>) {
        (&mut self.rows, &mut self.cols)
    }
}

impl BinaryMatrix for SparseBinMatrix {
    fn contains(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|r| r.binary_search(&col).is_ok())
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.col_count)
    }

    fn weight(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl BinaryMatrixOps for SparseBinMatrix {
    fn row_support(&self, row: usize) -> Vec<usize> {
        self.rows[row].clone()
    }

    fn col_support(&self, col: usize) -> Vec<usize> {
        self.cols[col].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_columns_from_rows() {
        let rows = vec![vec![0, 1], vec![1, 2]];
        let cols = columns_from_rows(&rows, 4);
        assert_eq!(cols, vec![vec![0], vec![0, 1], vec![1], vec![]]);
    }

    #[test]
    fn test_rows_from_columns() {
        let cols = vec![vec![0], vec![0, 1], vec![1], vec![]];
        let rows = rows_from_columns(&cols, 2);
        assert_eq!(rows, vec![vec![0, 1], vec![1, 2]]);
    }

    #[test]
    fn test_view_rebuild_idempotent() {
        // rows_from_columns(columns_from_rows(R, n), m) == R
        let rows = vec![vec![0, 2, 5], vec![], vec![1, 2], vec![5]];
        let rebuilt = rows_from_columns(&columns_from_rows(&rows, 6), rows.len());
        assert_eq!(rebuilt, rows);
    }

    #[test]
    fn test_from_rows_sorts_and_collapses() {
        let m = SparseBinMatrix::from_rows(vec![vec![3, 1, 1, 0]], 4).unwrap();
        assert_eq!(m.row(0), &[0, 1, 3]);
        assert!(m.is_dual_consistent());
    }

    #[test]
    fn test_from_rows_rejects_out_of_bounds() {
        assert_eq!(
            SparseBinMatrix::from_rows(vec![vec![0, 4]], 4),
            Err(SpckError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_from_views_rejects_inconsistent() {
        // column 1 claims row 1, but row 1 does not list column 1
        let rows = vec![vec![0, 1], vec![0]];
        let cols = vec![vec![0, 1], vec![0, 1]];
        assert_eq!(
            SparseBinMatrix::from_views(rows, cols),
            Err(SpckError::InconsistentViews)
        );
    }

    #[test]
    fn test_binary_matrix_access() {
        let m = SparseBinMatrix::from_rows(vec![vec![0, 1], vec![1, 2]], 4).unwrap();
        assert_eq!(m.dimensions(), (2, 4));
        assert_eq!(m.weight(), 4);
        assert!(m.contains(0, 1));
        assert!(!m.contains(1, 0));
        assert!(!m.contains(5, 0));
        assert_eq!(m.row_support(1), vec![1, 2]);
        assert_eq!(m.col_support(1), vec![0, 1]);
    }

    #[test]
    fn test_sorted_insert_remove() {
        let mut list = vec![1, 3, 5];
        insert_sorted(&mut list, 4);
        insert_sorted(&mut list, 1);
        assert_eq!(list, vec![1, 3, 4, 5]);
        remove_sorted(&mut list, 3);
        remove_sorted(&mut list, 9);
        assert_eq!(list, vec![1, 4, 5]);
    }
}
