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

use crate::problem::plot::PlotIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroPlotCountError;

impl std::fmt::Display for ZeroPlotCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The plot count must be positive.")
    }
}

impl std::error::Error for ZeroPlotCountError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateParticipantError {
    name: String,
}

impl DuplicateParticipantError {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for DuplicateParticipantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant {} appears more than once", self.name)
    }
}

impl std::error::Error for DuplicateParticipantError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlotOutOfRangeError {
    participant: String,
    plot: PlotIdentifier,
    plot_count: usize,
}

impl PlotOutOfRangeError {
    #[inline]
    pub fn new(participant: impl Into<String>, plot: PlotIdentifier, plot_count: usize) -> Self {
        Self {
            participant: participant.into(),
            plot,
            plot_count,
        }
    }

    #[inline]
    pub fn participant(&self) -> &str {
        &self.participant
    }

    #[inline]
    pub fn plot(&self) -> PlotIdentifier {
        self.plot
    }

    #[inline]
    pub fn plot_count(&self) -> usize {
        self.plot_count
    }
}

impl std::fmt::Display for PlotOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Participant {} ranks {} outside of [1, {}]",
            self.participant, self.plot, self.plot_count
        )
    }
}

impl std::error::Error for PlotOutOfRangeError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZeroWeightError {
    participant: String,
    plot: PlotIdentifier,
}

impl ZeroWeightError {
    #[inline]
    pub fn new(participant: impl Into<String>, plot: PlotIdentifier) -> Self {
        Self {
            participant: participant.into(),
            plot,
        }
    }

    #[inline]
    pub fn participant(&self) -> &str {
        &self.participant
    }

    #[inline]
    pub fn plot(&self) -> PlotIdentifier {
        self.plot
    }
}

impl std::fmt::Display for ZeroWeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Participant {} gives {} a weight of 0; weights start at 1",
            self.participant, self.plot
        )
    }
}

impl std::error::Error for ZeroWeightError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RosterError {
    ZeroPlotCount(ZeroPlotCountError),
    DuplicateParticipant(DuplicateParticipantError),
    PlotOutOfRange(PlotOutOfRangeError),
    ZeroWeight(ZeroWeightError),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::ZeroPlotCount(e) => write!(f, "{}", e),
            RosterError::DuplicateParticipant(e) => write!(f, "{}", e),
            RosterError::PlotOutOfRange(e) => write!(f, "{}", e),
            RosterError::ZeroWeight(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<ZeroPlotCountError> for RosterError {
    fn from(err: ZeroPlotCountError) -> Self {
        RosterError::ZeroPlotCount(err)
    }
}

impl From<DuplicateParticipantError> for RosterError {
    fn from(err: DuplicateParticipantError) -> Self {
        RosterError::DuplicateParticipant(err)
    }
}

impl From<PlotOutOfRangeError> for RosterError {
    fn from(err: PlotOutOfRangeError) -> Self {
        RosterError::PlotOutOfRange(err)
    }
}

impl From<ZeroWeightError> for RosterError {
    fn from(err: ZeroWeightError) -> Self {
        RosterError::ZeroWeight(err)
    }
}
