// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod err;

use crate::hungarian::err::{CostOverflowError, NoAugmentingPathError, SolveError};
use plot_alloc_core::prelude::{AssignNumeric, SquareMatrix};
use serde::Serialize;

/// A perfect matching of a square matrix: row `r` is matched to column
/// `row_to_col[r]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Matching<T> {
    row_to_col: Vec<usize>,
    total: T,
}

impl<T: Copy> Matching<T> {
    #[inline]
    pub fn total(&self) -> T {
        self.total
    }

    #[inline]
    pub fn row_to_col(&self) -> &[usize] {
        &self.row_to_col
    }

    #[inline]
    pub fn column_for(&self, row: usize) -> Option<usize> {
        self.row_to_col.get(row).copied()
    }

    pub fn col_to_row(&self) -> Vec<usize> {
        let mut out = vec![0; self.row_to_col.len()];
        for (r, &c) in self.row_to_col.iter().enumerate() {
            out[c] = r;
        }
        out
    }

    /// `(row, column)` pairs in row order.
    #[inline]
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col.iter().copied().enumerate()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.row_to_col.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.row_to_col.is_empty()
    }
}

/// Minimum-cost perfect matching (Hungarian method with dual potentials).
///
/// Rows are inserted one at a time; each insertion runs a Dijkstra-like search
/// over reduced costs `c[i][j] - u[i] - v[j]` until it reaches a free column,
/// then flips the alternating path. `O(n^3)` overall.
///
/// Among equal reduced costs the lowest column index wins, so the result is
/// a function of the matrix alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct KuhnMunkres;

impl KuhnMunkres {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn solve<T: AssignNumeric>(&self, costs: &SquareMatrix<T>) -> Result<Matching<T>, SolveError> {
        let n = costs.size();
        if n == 0 {
            return Ok(Matching {
                row_to_col: Vec::new(),
                total: T::zero(),
            });
        }

        let inf = T::max_value();
        // Index 0 is a virtual column/row that anchors each search; real rows
        // and columns are 1-based in these arrays.
        let mut u = vec![T::zero(); n + 1];
        let mut v = vec![T::zero(); n + 1];
        let mut col_owner = vec![0usize; n + 1];
        let mut way = vec![0usize; n + 1];
        let mut min_slack = vec![inf; n + 1];
        let mut used = vec![false; n + 1];

        for row in 1..=n {
            col_owner[0] = row;
            let mut j0 = 0usize;
            min_slack.fill(inf);
            used.fill(false);

            loop {
                used[j0] = true;
                let i0 = col_owner[j0];
                let mut delta = inf;
                let mut j1 = 0usize;

                for j in 1..=n {
                    if used[j] {
                        continue;
                    }
                    let reduced = costs[(i0 - 1, j - 1)]
                        .checked_sub(&u[i0])
                        .and_then(|c| c.checked_sub(&v[j]))
                        .ok_or_else(|| CostOverflowError::new(i0 - 1, j - 1))?;
                    if reduced < min_slack[j] {
                        min_slack[j] = reduced;
                        way[j] = j0;
                    }
                    if min_slack[j] < delta {
                        delta = min_slack[j];
                        j1 = j;
                    }
                }

                if j1 == 0 {
                    return Err(NoAugmentingPathError::new(row - 1))?;
                }

                for j in 0..=n {
                    if used[j] {
                        let owner = col_owner[j];
                        u[owner] = u[owner]
                            .checked_add(&delta)
                            .ok_or_else(|| CostOverflowError::new(owner - 1, j.saturating_sub(1)))?;
                        v[j] = v[j]
                            .checked_sub(&delta)
                            .ok_or_else(|| CostOverflowError::new(owner - 1, j.saturating_sub(1)))?;
                    } else {
                        min_slack[j] = min_slack[j]
                            .checked_sub(&delta)
                            .ok_or_else(|| CostOverflowError::new(row - 1, j.saturating_sub(1)))?;
                    }
                }

                j0 = j1;
                if col_owner[j0] == 0 {
                    break;
                }
            }

            // Flip the alternating path back to the virtual column.
            loop {
                let j1 = way[j0];
                col_owner[j0] = col_owner[j1];
                j0 = j1;
                if j0 == 0 {
                    break;
                }
            }
        }

        let mut row_to_col = vec![0usize; n];
        for j in 1..=n {
            row_to_col[col_owner[j] - 1] = j - 1;
        }

        let mut total = T::zero();
        for (r, &c) in row_to_col.iter().enumerate() {
            total = total
                .checked_add(&costs[(r, c)])
                .ok_or_else(|| CostOverflowError::new(r, c))?;
        }

        Ok(Matching { row_to_col, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn m(rows: &[&[i64]]) -> SquareMatrix<i64> {
        SquareMatrix::from_rows(rows).unwrap()
    }

    fn brute_force(costs: &SquareMatrix<i64>) -> i64 {
        fn go(costs: &SquareMatrix<i64>, row: usize, used: &mut Vec<bool>, acc: i64, best: &mut i64) {
            let n = costs.size();
            if row == n {
                *best = (*best).min(acc);
                return;
            }
            for c in 0..n {
                if !used[c] {
                    used[c] = true;
                    go(costs, row + 1, used, acc + costs[(row, c)], best);
                    used[c] = false;
                }
            }
        }
        let mut best = i64::MAX;
        go(costs, 0, &mut vec![false; costs.size()], 0, &mut best);
        best
    }

    fn assert_bijection(mt: &Matching<i64>, n: usize) {
        let mut seen = vec![false; n];
        for (_, c) in mt.pairs() {
            assert!(c < n);
            assert!(!seen[c], "column {c} used twice");
            seen[c] = true;
        }
        assert_eq!(mt.len(), n);
    }

    #[test]
    fn test_empty_matrix() {
        let mt = KuhnMunkres::new()
            .solve(&SquareMatrix::<i64>::filled(0, 0))
            .unwrap();
        assert!(mt.is_empty());
        assert_eq!(mt.total(), 0);
    }

    #[test]
    fn test_single_cell() {
        let mt = KuhnMunkres::new().solve(&m(&[&[42]])).unwrap();
        assert_eq!(mt.row_to_col(), &[0]);
        assert_eq!(mt.total(), 42);
    }

    #[test]
    fn test_classic_three_by_three() {
        let costs = m(&[&[4, 1, 3], &[2, 0, 5], &[3, 2, 2]]);
        let mt = KuhnMunkres::new().solve(&costs).unwrap();
        assert_eq!(mt.total(), 5);
        assert_eq!(mt.row_to_col(), &[1, 0, 2]);
        assert_eq!(mt.col_to_row(), vec![1, 0, 2]);
    }

    #[test]
    fn test_preference_example() {
        let costs = m(&[&[1, 2, 3], &[2, 1, 3], &[3, 3, 1]]);
        let mt = KuhnMunkres::new().solve(&costs).unwrap();
        assert_eq!(mt.row_to_col(), &[0, 1, 2]);
        assert_eq!(mt.total(), 3);
    }

    #[test]
    fn test_uniform_matrix_is_identity() {
        let costs = SquareMatrix::filled(4, 7i64);
        let mt = KuhnMunkres::new().solve(&costs).unwrap();
        assert_eq!(mt.total(), 28);
        assert_bijection(&mt, 4);
        assert_eq!(mt.row_to_col(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_negative_costs() {
        let costs = m(&[&[-5, 0], &[0, -5]]);
        let mt = KuhnMunkres::new().solve(&costs).unwrap();
        assert_eq!(mt.total(), -10);
    }

    #[test]
    fn test_matches_brute_force_on_random_matrices() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        for _ in 0..200 {
            let n = rng.random_range(1..=6usize);
            let rows: Vec<Vec<i64>> = (0..n)
                .map(|_| (0..n).map(|_| rng.random_range(0..20i64)).collect())
                .collect();
            let costs = SquareMatrix::from_rows(&rows).unwrap();
            let mt = KuhnMunkres::new().solve(&costs).unwrap();
            assert_bijection(&mt, n);
            assert_eq!(mt.total(), brute_force(&costs), "matrix {:?}", rows);
            let recomputed: i64 = mt.pairs().map(|(r, c)| costs[(r, c)]).sum();
            assert_eq!(recomputed, mt.total());
        }
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rows: Vec<Vec<i64>> = (0..6)
            .map(|_| (0..6).map(|_| rng.random_range(0..3i64)).collect())
            .collect();
        let costs = SquareMatrix::from_rows(&rows).unwrap();
        let a = KuhnMunkres::new().solve(&costs).unwrap();
        let b = KuhnMunkres::new().solve(&costs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_works_for_narrow_integers() {
        let costs = SquareMatrix::from_rows(&[[3i16, 1], [1, 3]]).unwrap();
        let mt = KuhnMunkres::new().solve(&costs).unwrap();
        assert_eq!(mt.total(), 2);
    }

    #[test]
    fn test_overflow_is_reported() {
        let costs = SquareMatrix::from_rows(&[[i8::MIN, 0], [0, i8::MAX]]).unwrap();
        assert!(matches!(
            KuhnMunkres::new().solve(&costs),
            Err(SolveError::Overflow(_))
        ));
    }
}
