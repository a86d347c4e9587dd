//! Pure validation checks for parity-check construction
//!
//! No I/O and no mutation; these functions verify the structural
//! invariants that the elimination engine assumes on entry and that the
//! systematic form guarantees on exit.

use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::error::{Result, SpckError};

/// Validate regular-code parameters: all nonzero and n*c = m*d.
///
/// Every variable node has degree `c` and every check node degree `d`,
/// so both sides count the edges of the bipartite graph.
pub const fn validate_regular_dims(m: usize, n: usize, c: usize, d: usize) -> Result<()> {
    if m == 0 || n == 0 || c == 0 || d == 0 {
        return Err(SpckError::DimensionMismatch);
    }
    if n * c != m * d {
        return Err(SpckError::DimensionMismatch);
    }
    Ok(())
}

/// Check that a list is strictly ascending (sorted, no duplicates).
fn is_strictly_ascending(list: &[usize]) -> bool {
    list.windows(2).all(|w| w[0] < w[1])
}

/// Validate full dual consistency of a row view and a column view.
///
/// Checks sortedness, absence of duplicates, index bounds, and the
/// duality invariant: row `i` lists column `j` iff column `j` lists
/// row `i`.
pub fn validate_dual_views(rows: &[Vec<usize>], cols: &[Vec<usize>]) -> Result<()> {
    let mut entries: HashSet<(usize, usize)> = HashSet::new();
    for (i, row) in rows.iter().enumerate() {
        if !is_strictly_ascending(row) {
            return Err(SpckError::InconsistentViews);
        }
        for &j in row {
            if j >= cols.len() {
                return Err(SpckError::IndexOutOfBounds);
            }
            entries.insert((i, j));
        }
    }
    for (j, col) in cols.iter().enumerate() {
        if !is_strictly_ascending(col) {
            return Err(SpckError::InconsistentViews);
        }
        for &i in col {
            if i >= rows.len() {
                return Err(SpckError::IndexOutOfBounds);
            }
            if !entries.remove(&(i, j)) {
                return Err(SpckError::InconsistentViews);
            }
        }
    }
    if !entries.is_empty() {
        return Err(SpckError::InconsistentViews);
    }
    Ok(())
}

/// Validate the systematic [I | P] shape of a row view.
///
/// With m rows, the leading m columns must form an identity block:
/// row `i` contains column `i`, and no row contains a column below m
/// other than its own index.
pub fn validate_systematic(rows: &[Vec<usize>]) -> Result<()> {
    let m = rows.len();
    for (i, row) in rows.iter().enumerate() {
        if row.binary_search(&i).is_err() {
            return Err(SpckError::InconsistentViews);
        }
        for &j in row {
            if j < m && j != i {
                return Err(SpckError::InconsistentViews);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_validate_regular_dims() {
        // 12 checks x 16 variables, column weight 6, row weight 8
        assert_eq!(validate_regular_dims(12, 16, 6, 8), Ok(()));
        assert_eq!(
            validate_regular_dims(12, 16, 5, 8),
            Err(SpckError::DimensionMismatch)
        );
        assert_eq!(
            validate_regular_dims(0, 16, 6, 8),
            Err(SpckError::DimensionMismatch)
        );
    }

    #[test]
    fn test_validate_dual_views_accepts_consistent() {
        let rows = vec![vec![0, 1], vec![1, 2]];
        let cols = vec![vec![0], vec![0, 1], vec![1], vec![]];
        assert_eq!(validate_dual_views(&rows, &cols), Ok(()));
    }

    #[test]
    fn test_validate_dual_views_rejects_missing_entry() {
        let rows = vec![vec![0, 1], vec![1, 2]];
        // column 2 is missing its entry for row 1
        let cols = vec![vec![0], vec![0, 1], vec![], vec![]];
        assert_eq!(
            validate_dual_views(&rows, &cols),
            Err(SpckError::InconsistentViews)
        );
    }

    #[test]
    fn test_validate_dual_views_rejects_unsorted() {
        let rows = vec![vec![1, 0]];
        let cols = vec![vec![0], vec![0]];
        assert_eq!(
            validate_dual_views(&rows, &cols),
            Err(SpckError::InconsistentViews)
        );
    }

    #[test]
    fn test_validate_dual_views_rejects_out_of_bounds() {
        let rows = vec![vec![0, 2]];
        let cols = vec![vec![0], vec![]];
        assert_eq!(
            validate_dual_views(&rows, &cols),
            Err(SpckError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_validate_systematic() {
        // [I_2 | P] with one parity column
        assert_eq!(validate_systematic(&[vec![0, 2], vec![1, 2]]), Ok(()));
        // row 1 intrudes into row 0's identity column
        assert_eq!(
            validate_systematic(&[vec![0], vec![0, 1]]),
            Err(SpckError::InconsistentViews)
        );
        // row 0 has no 1 on the diagonal
        assert_eq!(
            validate_systematic(&[vec![2], vec![1]]),
            Err(SpckError::InconsistentViews)
        );
    }
}
