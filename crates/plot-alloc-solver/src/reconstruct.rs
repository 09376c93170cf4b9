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

use plot_alloc_model::prelude::{Assignment, PlotIdentifier, Roster};

/// Maps a solved matching back onto the roster.
///
/// Pairs involving a ghost row or ghost column are dropped. Scores are looked
/// up again from the participant's preferences rather than read from the
/// matrix, so the result does not depend on how costs were padded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconstructor;

impl Reconstructor {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// `pairs` yields `(row, column)` of the solved matrix. Output follows the
    /// roster's participant order.
    pub fn reconstruct<I>(&self, roster: &Roster, pairs: I) -> Vec<Assignment>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let plot_count = roster.plot_count();
        let mut out: Vec<(usize, Assignment)> = pairs
            .into_iter()
            .filter(|&(_, col)| col < plot_count)
            .filter_map(|(row, col)| {
                let participant = roster.participant(row)?;
                let plot = PlotIdentifier::from_column(col);
                let score = participant
                    .preferences()
                    .weight_or_sentinel(plot, plot_count);
                Some((
                    row,
                    Assignment::new(participant.name(), plot, score)
                        .with_flagged(participant.is_flagged()),
                ))
            })
            .collect();
        out.sort_by_key(|(row, _)| *row);
        out.into_iter().map(|(_, a)| a).collect()
    }
}
