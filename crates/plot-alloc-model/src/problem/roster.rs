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

use crate::problem::{
    err::{
        DuplicateParticipantError, PlotOutOfRangeError, RosterError, ZeroPlotCountError,
        ZeroWeightError,
    },
    participant::Participant,
};
use serde::Serialize;
use std::collections::HashSet;

/// An immutable snapshot of one optimization run's input: `P` plots and the
/// ordered participants competing for them. Participant order is the matrix row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    plot_count: usize,
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(plot_count: usize, participants: Vec<Participant>) -> Result<Self, RosterError> {
        if plot_count == 0 {
            return Err(ZeroPlotCountError)?;
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(participants.len());
        for p in participants.iter() {
            if !seen.insert(p.name()) {
                return Err(DuplicateParticipantError::new(p.name()))?;
            }
            for (plot, weight) in p.preferences().iter() {
                if !plot.is_within(plot_count) {
                    return Err(PlotOutOfRangeError::new(p.name(), plot, plot_count))?;
                }
                if weight == 0 {
                    return Err(ZeroWeightError::new(p.name(), plot))?;
                }
            }
        }

        Ok(Self {
            plot_count,
            participants,
        })
    }

    #[inline]
    pub fn plot_count(&self) -> usize {
        self.plot_count
    }

    #[inline]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[inline]
    pub fn participant(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    #[inline]
    pub fn participant_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name() == name)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.participants.iter()
    }

    #[inline]
    pub fn iter_flagged(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.participants.iter().filter(|p| p.is_flagged())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Side length of the cost matrix: `max(participants, P)`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.participants.len().max(self.plot_count)
    }

    /// Number of real participant/plot pairs a complete assignment contains.
    #[inline]
    pub fn expected_assignments(&self) -> usize {
        self.participants.len().min(self.plot_count)
    }

    /// Largest number of non-sentinel ranks any participant expressed.
    #[inline]
    pub fn max_ranked_len(&self) -> usize {
        self.participants
            .iter()
            .map(|p| p.preferences().ranked_len(self.plot_count))
            .max()
            .unwrap_or(0)
    }

    #[inline]
    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}
