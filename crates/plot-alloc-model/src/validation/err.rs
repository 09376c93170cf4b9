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

use crate::problem::plot::{PlotIdentifier, Weight};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownParticipantError {
    participant: String,
}

impl UnknownParticipantError {
    #[inline]
    pub fn new(participant: impl Into<String>) -> Self {
        Self {
            participant: participant.into(),
        }
    }
    #[inline]
    pub fn participant(&self) -> &str {
        &self.participant
    }
}

impl std::fmt::Display for UnknownParticipantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment for unknown participant {} (not in roster)",
            self.participant
        )
    }
}

impl std::error::Error for UnknownParticipantError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignedPlotOutOfRangeError {
    participant: String,
    plot: PlotIdentifier,
    plot_count: usize,
}

impl AssignedPlotOutOfRangeError {
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

impl std::fmt::Display for AssignedPlotOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Participant {} is assigned {} but only plots 1..={} exist",
            self.participant, self.plot, self.plot_count
        )
    }
}

impl std::error::Error for AssignedPlotOutOfRangeError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantAssignedTwiceError {
    participant: String,
}

impl ParticipantAssignedTwiceError {
    #[inline]
    pub fn new(participant: impl Into<String>) -> Self {
        Self {
            participant: participant.into(),
        }
    }
    #[inline]
    pub fn participant(&self) -> &str {
        &self.participant
    }
}

impl std::fmt::Display for ParticipantAssignedTwiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Multiple assignments for participant {} (only one allowed)",
            self.participant
        )
    }
}

impl std::error::Error for ParticipantAssignedTwiceError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlotAssignedTwiceError {
    plot: PlotIdentifier,
}

impl PlotAssignedTwiceError {
    #[inline]
    pub fn new(plot: PlotIdentifier) -> Self {
        Self { plot }
    }
    #[inline]
    pub fn plot(&self) -> PlotIdentifier {
        self.plot
    }
}

impl std::fmt::Display for PlotAssignedTwiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is assigned to more than one participant", self.plot)
    }
}

impl std::error::Error for PlotAssignedTwiceError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncompleteAssignmentError {
    expected: usize,
    actual: usize,
}

impl IncompleteAssignmentError {
    #[inline]
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }
    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }
    #[inline]
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl std::fmt::Display for IncompleteAssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expected {} assignments but got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for IncompleteAssignmentError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreMismatchError {
    participant: String,
    plot: PlotIdentifier,
    expected: Weight,
    actual: Weight,
}

impl ScoreMismatchError {
    #[inline]
    pub fn new(
        participant: impl Into<String>,
        plot: PlotIdentifier,
        expected: Weight,
        actual: Weight,
    ) -> Self {
        Self {
            participant: participant.into(),
            plot,
            expected,
            actual,
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
    pub fn expected(&self) -> Weight {
        self.expected
    }
    #[inline]
    pub fn actual(&self) -> Weight {
        self.actual
    }
}

impl std::fmt::Display for ScoreMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Participant {} on {} carries score {} but their preferences give {}",
            self.participant, self.plot, self.actual, self.expected
        )
    }
}

impl std::error::Error for ScoreMismatchError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssignmentValidationError {
    UnknownParticipant(UnknownParticipantError),
    PlotOutOfRange(AssignedPlotOutOfRangeError),
    ParticipantAssignedTwice(ParticipantAssignedTwiceError),
    PlotAssignedTwice(PlotAssignedTwiceError),
    Incomplete(IncompleteAssignmentError),
    ScoreMismatch(ScoreMismatchError),
}

impl std::fmt::Display for AssignmentValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentValidationError::UnknownParticipant(e) => write!(f, "{e}"),
            AssignmentValidationError::PlotOutOfRange(e) => write!(f, "{e}"),
            AssignmentValidationError::ParticipantAssignedTwice(e) => write!(f, "{e}"),
            AssignmentValidationError::PlotAssignedTwice(e) => write!(f, "{e}"),
            AssignmentValidationError::Incomplete(e) => write!(f, "{e}"),
            AssignmentValidationError::ScoreMismatch(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AssignmentValidationError {}

impl From<UnknownParticipantError> for AssignmentValidationError {
    fn from(e: UnknownParticipantError) -> Self {
        Self::UnknownParticipant(e)
    }
}

impl From<AssignedPlotOutOfRangeError> for AssignmentValidationError {
    fn from(e: AssignedPlotOutOfRangeError) -> Self {
        Self::PlotOutOfRange(e)
    }
}

impl From<ParticipantAssignedTwiceError> for AssignmentValidationError {
    fn from(e: ParticipantAssignedTwiceError) -> Self {
        Self::ParticipantAssignedTwice(e)
    }
}

impl From<PlotAssignedTwiceError> for AssignmentValidationError {
    fn from(e: PlotAssignedTwiceError) -> Self {
        Self::PlotAssignedTwice(e)
    }
}

impl From<IncompleteAssignmentError> for AssignmentValidationError {
    fn from(e: IncompleteAssignmentError) -> Self {
        Self::Incomplete(e)
    }
}

impl From<ScoreMismatchError> for AssignmentValidationError {
    fn from(e: ScoreMismatchError) -> Self {
        Self::ScoreMismatch(e)
    }
}
