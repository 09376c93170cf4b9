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

use plot_alloc_core::prelude::Cost;
use plot_alloc_model::prelude::{Assignment, Outcome, Score};

/// Buckets assignments and sums satisfaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreClassifier;

impl ScoreClassifier {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Every assignment lands in a bucket. Flagged participants go to the
    /// cheater list and do not contribute `P - score` to the total.
    pub fn score(&self, assignments: &[Assignment], plot_count: usize) -> Score {
        let mut score = Score::new();
        for a in assignments {
            score.record(Outcome::classify(a.score(), plot_count));
            if a.is_flagged() {
                score.add_cheater(a.participant());
            } else {
                score.add_to_total(plot_count as Cost - a.score() as Cost);
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plot_alloc_model::prelude::PlotIdentifier;

    fn asg(name: &str, plot: u32, score: u32) -> Assignment {
        Assignment::new(name, PlotIdentifier::new(plot), score)
    }

    #[test]
    fn test_all_first_choices() {
        let s = ScoreClassifier::new().score(&[asg("A", 1, 1), asg("B", 2, 1), asg("C", 3, 1)], 3);
        assert_eq!(s.total(), 6);
        assert_eq!(s.best(), 3);
        assert_eq!(s.mid(), 0);
        assert_eq!(s.worst(), 0);
        assert!(s.cheaters().is_empty());
    }

    #[test]
    fn test_buckets_and_total() {
        let s = ScoreClassifier::new().score(&[asg("A", 1, 1), asg("B", 2, 3), asg("C", 3, 5)], 5);
        assert_eq!(s.best(), 1);
        assert_eq!(s.mid(), 1);
        assert_eq!(s.worst(), 1);
        assert_eq!(s.total(), 4 + 2);
    }

    #[test]
    fn test_flagged_is_excluded_from_total() {
        let s = ScoreClassifier::new().score(
            &[asg("A", 1, 1), asg("D", 2, 3).with_flagged(true)],
            3,
        );
        assert_eq!(s.total(), 2);
        assert_eq!(s.worst(), 1);
        assert_eq!(s.cheaters(), &["D".to_string()]);
    }

    #[test]
    fn test_empty_assignment_list() {
        let s = ScoreClassifier::new().score(&[], 4);
        assert_eq!(s, Score::default());
    }
}
