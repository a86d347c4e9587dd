//! Random sparse parity-check matrix generation
//!
//! Regular LDPC constructions over a caller-supplied randomness source.
//! A (c, d)-regular m x n matrix has column weight c and row weight d,
//! tied together by the edge count of the bipartite graph: n*c = m*d.
//! Parallel edges cancel over GF(2), so realized weights can fall below
//! the nominal ones by an even amount.

use rand::seq::SliceRandom;
use rand::Rng;
use spck_core::{validate_regular_dims, Result, SparseBinMatrix, SpckError};

/// Parameters for a (c, d)-regular m x n parity-check matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    m: usize,
    n: usize,
    c: usize,
    d: usize,
}

impl GeneratorConfig {
    /// Create a config from explicit dimensions and weights.
    ///
    /// The parameters are validated by the construction methods, not
    /// here, so an inconsistent config can still be inspected.
    pub fn new(m: usize, n: usize, c: usize, d: usize) -> Self {
        Self { m, n, c, d }
    }

    /// Config for a code with k information symbols: block length
    /// n = k*d/(d - c) and m = n - k check rows.
    ///
    /// Fails unless d > c and the block length comes out integral.
    pub fn regular(k: usize, c: usize, d: usize) -> Result<Self> {
        if k == 0 || c == 0 || d <= c || (k * d) % (d - c) != 0 {
            return Err(SpckError::DimensionMismatch);
        }
        let n = (k * d) / (d - c);
        Ok(Self::new(n - k, n, c, d))
    }

    /// Number of check rows m
    pub fn check_count(&self) -> usize {
        self.m
    }

    /// Number of variable columns n
    pub fn variable_count(&self) -> usize {
        self.n
    }

    /// Nominal column weight c
    pub fn col_weight(&self) -> usize {
        self.c
    }

    /// Nominal row weight d
    pub fn row_weight(&self) -> usize {
        self.d
    }

    fn validate(&self) -> Result<()> {
        validate_regular_dims(self.m, self.n, self.c, self.d)?;
        if self.d > self.n || self.c > self.m {
            return Err(SpckError::DimensionMismatch);
        }
        Ok(())
    }

    /// Random bipartite-permutation construction.
    ///
    /// The n*c edge slots are shuffled; slot i of the permutation joins
    /// variable `perm[i] / c` to check `i / d`. Parallel edges cancel
    /// mod 2, so every row weight is congruent to d (and every column
    /// weight to c) modulo 2.
    pub fn bipartite<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SparseBinMatrix> {
        self.validate()?;
        let edges = self.n * self.c;
        let mut perm: Vec<usize> = (0..edges).collect();
        perm.shuffle(rng);
        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); self.m];
        for (slot, &edge) in perm.iter().enumerate() {
            let variable = edge / self.c;
            let check = slot / self.d;
            rows[check].push(variable);
        }
        for row in &mut rows {
            row.sort_unstable();
            cancel_pairs(row);
        }
        SparseBinMatrix::from_rows(rows, self.n)
    }

    /// Bipartite construction with appended redundant rows.
    ///
    /// GF(2) sums of the row pairs (0,1), (4,5), (8,9), ... are appended,
    /// making the matrix deliberately rank-deficient; useful for
    /// exercising rank-deficiency handling downstream.
    pub fn bipartite_redundant<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SparseBinMatrix> {
        let base = self.bipartite(rng)?;
        let mut rows = base.into_rows();
        for i in (0..self.m / 2).step_by(2) {
            if 2 * i + 1 < self.m {
                let sum = symmetric_difference(&rows[2 * i], &rows[2 * i + 1]);
                rows.push(sum);
            }
        }
        SparseBinMatrix::from_rows(rows, self.n)
    }

    /// Row-shuffle construction: every row is an independent uniform
    /// choice of d distinct columns. Row weights are exactly d; column
    /// weights only approximate c.
    pub fn row_shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SparseBinMatrix> {
        self.validate()?;
        let mut rows = Vec::with_capacity(self.m);
        for _ in 0..self.m {
            let mut row = rand::seq::index::sample(rng, self.n, self.d).into_vec();
            row.sort_unstable();
            rows.push(row);
        }
        SparseBinMatrix::from_rows(rows, self.n)
    }
}

/// Drop value pairs from a sorted list: a run of length r keeps r mod 2
/// entries (GF(2) addition of parallel edges).
fn cancel_pairs(row: &mut Vec<usize>) {
    let mut out = Vec::with_capacity(row.len());
    let mut idx = 0;
    while idx < row.len() {
        let mut run = 1;
        while idx + run < row.len() && row[idx + run] == row[idx] {
            run += 1;
        }
        if run % 2 == 1 {
            out.push(row[idx]);
        }
        idx += run;
    }
    *row = out;
}

/// GF(2) sum of two sorted rows.
fn symmetric_difference(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut x, mut y) = (0, 0);
    while x < a.len() && y < b.len() {
        match a[x].cmp(&b[y]) {
            std::cmp::Ordering::Less => {
                out.push(a[x]);
                x += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[y]);
                y += 1;
            }
            std::cmp::Ordering::Equal => {
                x += 1;
                y += 1;
            }
        }
    }
    out.extend_from_slice(&a[x..]);
    out.extend_from_slice(&b[y..]);
    out
}
