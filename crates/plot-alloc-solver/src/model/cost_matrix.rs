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

use plot_alloc_core::prelude::{Cost, SquareMatrix};
use plot_alloc_model::prelude::{PlotIdentifier, Roster};

/// Square cost matrix for one roster.
///
/// Row `i < participant_count` is participant `i`, column `j < plot_count` is
/// plot `j + 1`. Everything beyond is padding ("ghost" rows or columns) so the
/// matrix stays square when participants and plots differ in number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    matrix: SquareMatrix<Cost>,
    participant_count: usize,
    plot_count: usize,
}

impl CostMatrix {
    #[inline]
    pub fn matrix(&self) -> &SquareMatrix<Cost> {
        &self.matrix
    }

    #[inline]
    pub fn into_inner(self) -> SquareMatrix<Cost> {
        self.matrix
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    #[inline]
    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    #[inline]
    pub fn plot_count(&self) -> usize {
        self.plot_count
    }

    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> Option<Cost> {
        self.matrix.get(row, col)
    }

    #[inline]
    pub fn is_ghost_row(&self, row: usize) -> bool {
        row >= self.participant_count
    }

    #[inline]
    pub fn is_ghost_column(&self, col: usize) -> bool {
        col >= self.plot_count
    }
}

impl std::fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "CostMatrix {}x{} ({} participants, {} plots)",
            self.size(),
            self.size(),
            self.participant_count,
            self.plot_count
        )?;
        write!(f, "{}", self.matrix)
    }
}

/// Turns a roster into a [`CostMatrix`].
///
/// A real cell costs the participant's weight for the plot, or `P` when they
/// ranked nothing there (flagged participants rank nothing). Every ghost cell
/// costs `ghost_cost`, which must exceed any weight a real participant can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostMatrixBuilder {
    ghost_cost: Cost,
}

impl Default for CostMatrixBuilder {
    fn default() -> Self {
        Self { ghost_cost: 1000 }
    }
}

impl CostMatrixBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ghost_cost(mut self, cost: Cost) -> Self {
        self.ghost_cost = cost;
        self
    }

    #[inline]
    pub fn ghost_cost_value(&self) -> Cost {
        self.ghost_cost
    }

    pub fn build(&self, roster: &Roster) -> CostMatrix {
        let plot_count = roster.plot_count();
        let participant_count = roster.len();
        let n = roster.dimension();

        let mut matrix = SquareMatrix::filled(n, self.ghost_cost);
        for (row, participant) in roster.iter().enumerate() {
            let prefs = participant.preferences();
            for col in 0..plot_count {
                let plot = PlotIdentifier::from_column(col);
                matrix.set(row, col, prefs.weight_or_sentinel(plot, plot_count) as Cost);
            }
        }

        tracing::debug!(
            size = n,
            participants = participant_count,
            plots = plot_count,
            ghost_rows = n - participant_count,
            ghost_columns = n - plot_count,
            "Built cost matrix"
        );

        CostMatrix {
            matrix,
            participant_count,
            plot_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plot_alloc_model::prelude::{FlagReason, Participant, PreferenceSet, Weight};

    #[inline]
    fn pid(n: u32) -> PlotIdentifier {
        PlotIdentifier::new(n)
    }

    fn prefs(pairs: &[(u32, Weight)]) -> PreferenceSet {
        pairs.iter().map(|&(p, w)| (pid(p), w)).collect()
    }

    #[test]
    fn test_fewer_participants_than_plots_pads_rows() {
        let roster = Roster::new(
            5,
            vec![
                Participant::new("A", prefs(&[(1, 1), (3, 2)])),
                Participant::new("B", prefs(&[(5, 1)])),
                Participant::new("C", PreferenceSet::new()),
            ],
        )
        .unwrap();
        let m = CostMatrixBuilder::new().build(&roster);

        assert_eq!(m.size(), 5);
        assert_eq!(m.matrix().row(0), &[1, 5, 2, 5, 5]);
        assert_eq!(m.matrix().row(1), &[5, 5, 5, 5, 1]);
        assert_eq!(m.matrix().row(2), &[5; 5]);
        assert_eq!(m.matrix().row(3), &[1000; 5]);
        assert_eq!(m.matrix().row(4), &[1000; 5]);
        assert!(m.is_ghost_row(3));
        assert!(!m.is_ghost_row(2));
        assert!(!m.is_ghost_column(4));
    }

    #[test]
    fn test_more_participants_than_plots_pads_columns() {
        let ps = (0..4)
            .map(|i| Participant::new(format!("P{i}"), prefs(&[(1, 1)])))
            .collect();
        let roster = Roster::new(2, ps).unwrap();
        let m = CostMatrixBuilder::new().ghost_cost(77).build(&roster);

        assert_eq!(m.size(), 4);
        for row in 0..4 {
            assert_eq!(m.matrix().row(row), &[1, 2, 77, 77]);
        }
        assert!(m.is_ghost_column(2));
        assert!(!m.is_ghost_row(3));
    }

    #[test]
    fn test_flagged_row_is_all_sentinel() {
        let roster = Roster::new(
            3,
            vec![Participant::flagged(
                "D",
                FlagReason::DuplicateWeight {
                    plot: pid(2),
                    weight: 2,
                },
            )],
        )
        .unwrap();
        let m = CostMatrixBuilder::new().build(&roster);
        assert_eq!(m.matrix().row(0), &[3, 3, 3]);
    }

    #[test]
    fn test_every_cell_is_non_negative() {
        let roster = Roster::new(4, vec![Participant::new("A", prefs(&[(2, 1)]))]).unwrap();
        let m = CostMatrixBuilder::new().build(&roster);
        assert!(m.matrix().iter_cells().all(|&c| c >= 0));
        assert_eq!(m.cost(0, 1), Some(1));
        assert_eq!(m.cost(9, 9), None);
    }
}
