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

use crate::{
    problem::{plot::PlotIdentifier, roster::Roster},
    solution::asg::Assignment,
    validation::err::{
        AssignedPlotOutOfRangeError, AssignmentValidationError, IncompleteAssignmentError,
        ParticipantAssignedTwiceError, PlotAssignedTwiceError, ScoreMismatchError,
        UnknownParticipantError,
    },
};
use std::collections::BTreeSet;

/// Checks that an assignment list is a complete matching of `roster`.
#[derive(Debug, Clone)]
pub struct AssignmentValidator;

impl AssignmentValidator {
    #[inline]
    pub fn validate_participants_known(
        roster: &Roster,
        assignments: &[Assignment],
    ) -> Result<(), UnknownParticipantError> {
        for a in assignments {
            if roster.participant_by_name(a.participant()).is_none() {
                return Err(UnknownParticipantError::new(a.participant()));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_plots_in_range(
        roster: &Roster,
        assignments: &[Assignment],
    ) -> Result<(), AssignedPlotOutOfRangeError> {
        let plot_count = roster.plot_count();
        for a in assignments {
            if !a.plot().is_within(plot_count) {
                return Err(AssignedPlotOutOfRangeError::new(
                    a.participant(),
                    a.plot(),
                    plot_count,
                ));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_participants_unique(
        assignments: &[Assignment],
    ) -> Result<(), ParticipantAssignedTwiceError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for a in assignments {
            if !seen.insert(a.participant()) {
                return Err(ParticipantAssignedTwiceError::new(a.participant()));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_plots_unique(assignments: &[Assignment]) -> Result<(), PlotAssignedTwiceError> {
        let mut seen: BTreeSet<PlotIdentifier> = BTreeSet::new();
        for a in assignments {
            if !seen.insert(a.plot()) {
                return Err(PlotAssignedTwiceError::new(a.plot()));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_complete(
        roster: &Roster,
        assignments: &[Assignment],
    ) -> Result<(), IncompleteAssignmentError> {
        let expected = roster.expected_assignments();
        if assignments.len() != expected {
            return Err(IncompleteAssignmentError::new(expected, assignments.len()));
        }
        Ok(())
    }

    /// Scores must be recomputable from the roster alone.
    #[inline]
    pub fn validate_scores(
        roster: &Roster,
        assignments: &[Assignment],
    ) -> Result<(), ScoreMismatchError> {
        let plot_count = roster.plot_count();
        for a in assignments {
            let Some(p) = roster.participant_by_name(a.participant()) else {
                continue;
            };
            let expected = p.preferences().weight_or_sentinel(a.plot(), plot_count);
            if a.score() != expected {
                return Err(ScoreMismatchError::new(
                    a.participant(),
                    a.plot(),
                    expected,
                    a.score(),
                ));
            }
        }
        Ok(())
    }

    pub fn validate(
        roster: &Roster,
        assignments: &[Assignment],
    ) -> Result<(), AssignmentValidationError> {
        Self::validate_participants_known(roster, assignments)?;
        Self::validate_plots_in_range(roster, assignments)?;
        Self::validate_participants_unique(assignments)?;
        Self::validate_plots_unique(assignments)?;
        Self::validate_complete(roster, assignments)?;
        Self::validate_scores(roster, assignments)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{participant::Participant, plot::Weight, pref::PreferenceSet};

    #[inline]
    fn pid(n: u32) -> PlotIdentifier {
        PlotIdentifier::new(n)
    }

    fn prefs(pairs: &[(u32, Weight)]) -> PreferenceSet {
        pairs.iter().map(|&(p, w)| (pid(p), w)).collect()
    }

    fn roster() -> Roster {
        Roster::new(
            3,
            vec![
                Participant::new("A", prefs(&[(1, 1), (2, 2)])),
                Participant::new("B", prefs(&[(2, 1)])),
            ],
        )
        .unwrap()
    }

    fn asg(name: &str, plot: u32, score: Weight) -> Assignment {
        Assignment::new(name, pid(plot), score)
    }

    #[test]
    fn test_valid_assignment_passes() {
        let r = roster();
        let a = vec![asg("A", 1, 1), asg("B", 2, 1)];
        assert!(AssignmentValidator::validate(&r, &a).is_ok());
    }

    #[test]
    fn test_unknown_participant() {
        let r = roster();
        let a = vec![asg("A", 1, 1), asg("Z", 2, 3)];
        match AssignmentValidator::validate(&r, &a) {
            Err(AssignmentValidationError::UnknownParticipant(e)) => {
                assert_eq!(e.participant(), "Z")
            }
            other => panic!("expected UnknownParticipant, got {other:?}"),
        }
    }

    #[test]
    fn test_plot_out_of_range() {
        let r = roster();
        let a = vec![asg("A", 1, 1), asg("B", 4, 3)];
        assert!(matches!(
            AssignmentValidator::validate(&r, &a),
            Err(AssignmentValidationError::PlotOutOfRange(_))
        ));
    }

    #[test]
    fn test_plot_zero_is_out_of_range() {
        let r = roster();
        let a = vec![asg("A", 0, 3)];
        assert!(AssignmentValidator::validate_plots_in_range(&r, &a).is_err());
    }

    #[test]
    fn test_participant_twice() {
        let r = roster();
        let a = vec![asg("A", 1, 1), asg("A", 2, 2)];
        assert!(matches!(
            AssignmentValidator::validate(&r, &a),
            Err(AssignmentValidationError::ParticipantAssignedTwice(_))
        ));
    }

    #[test]
    fn test_plot_twice() {
        let r = roster();
        let a = vec![asg("A", 2, 2), asg("B", 2, 1)];
        match AssignmentValidator::validate(&r, &a) {
            Err(AssignmentValidationError::PlotAssignedTwice(e)) => assert_eq!(e.plot(), pid(2)),
            other => panic!("expected PlotAssignedTwice, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete() {
        let r = roster();
        let a = vec![asg("A", 1, 1)];
        match AssignmentValidator::validate(&r, &a) {
            Err(AssignmentValidationError::Incomplete(e)) => {
                assert_eq!(e.expected(), 2);
                assert_eq!(e.actual(), 1);
            }
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn test_score_mismatch() {
        let r = roster();
        // B never ranked plot 3, so the score must be the sentinel 3.
        let a = vec![asg("A", 1, 1), asg("B", 3, 1)];
        match AssignmentValidator::validate(&r, &a) {
            Err(AssignmentValidationError::ScoreMismatch(e)) => {
                assert_eq!(e.expected(), 3);
                assert_eq!(e.actual(), 1);
            }
            other => panic!("expected ScoreMismatch, got {other:?}"),
        }
    }
}
