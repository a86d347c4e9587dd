//! Sparse GF(2) pivot elimination
//!
//! In-place Gaussian elimination over the dual-view representation. One
//! pivot column is chosen per row and cleared from every other row that
//! shares it, using sorted-list merges instead of dense row arithmetic.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;

use crate::matrix::{insert_sorted, remove_sorted, SparseBinMatrix};

/// Choose a pivot column for every row and eliminate it from all other
/// rows, mutating the matrix in place.
///
/// Rows are processed in index order; this order is the tie-break that
/// makes the result deterministic. The pivot of row `i` is its smallest
/// column index at the time the row is reached. A row that is empty at
/// that point is a GF(2) combination of earlier rows: it gets `None` and
/// stays untouched.
///
/// On return, every `Some(p)` column contains exactly one 1, in its pivot
/// row, and the two views are again fully dual-consistent.
pub fn find_pivots(matrix: &mut SparseBinMatrix) -> Vec<Option<usize>> {
    let m = matrix.row_count();
    let mut pivots = Vec::with_capacity(m);
    let (rows, cols) = matrix.views_mut();
    for i in 0..m {
        if rows[i].is_empty() {
            pivots.push(None);
            continue;
        }
        let p = rows[i][0];
        pivots.push(Some(p));
        // Snapshots: column p's list is rewritten only after the loop, and
        // the pivot row must stay readable while other rows merge with it.
        let sharing = cols[p].clone();
        let pivot_row = rows[i].clone();
        for &s in &sharing {
            if s == i {
                continue;
            }
            xor_assign_row(rows, cols, s, &pivot_row, p);
        }
        // Row i is now the sole owner of its pivot column.
        cols[p].clear();
        cols[p].push(i);
    }
    pivots
}

/// Replace row `target` with its GF(2) sum (symmetric difference) with
/// `pivot_row`, patching the column lists for every merged value except
/// the pivot column `p` itself, which the caller rewrites in one shot.
fn xor_assign_row(
    rows: &mut [Vec<usize>],
    cols: &mut [Vec<usize>],
    target: usize,
    pivot_row: &[usize],
    p: usize,
) {
    let old = mem::take(&mut rows[target]);
    let mut merged = Vec::with_capacity(old.len() + pivot_row.len());
    let (mut x, mut y) = (0, 0);
    while x < old.len() && y < pivot_row.len() {
        match old[x].cmp(&pivot_row[y]) {
            Ordering::Less => {
                merged.push(old[x]);
                x += 1;
            }
            Ordering::Greater => {
                let v = pivot_row[y];
                merged.push(v);
                if v != p {
                    insert_sorted(&mut cols[v], target);
                }
                y += 1;
            }
            Ordering::Equal => {
                // 1 + 1 = 0: the entry cancels
                let v = old[x];
                if v != p {
                    remove_sorted(&mut cols[v], target);
                }
                x += 1;
                y += 1;
            }
        }
    }
    merged.extend_from_slice(&old[x..]);
    while y < pivot_row.len() {
        let v = pivot_row[y];
        merged.push(v);
        if v != p {
            insert_sorted(&mut cols[v], target);
        }
        y += 1;
    }
    rows[target] = merged;
}
