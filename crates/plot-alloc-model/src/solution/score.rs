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

use crate::problem::plot::Weight;
use plot_alloc_core::prelude::Cost;
use serde::{Deserialize, Serialize};

/// Satisfaction bucket of a single assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Got their first choice.
    Best,
    /// Got something they ranked, but not first.
    Mid,
    /// Got a plot they expressed nothing for.
    Worst,
}

impl Outcome {
    /// The sentinel is tested first, so with a single plot a score of 1 is
    /// still the worst outcome.
    #[inline]
    pub fn classify(score: Weight, plot_count: usize) -> Self {
        if score as usize == plot_count {
            Outcome::Worst
        } else if score == 1 {
            Outcome::Best
        } else {
            Outcome::Mid
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Best => write!(f, "best"),
            Outcome::Mid => write!(f, "mid"),
            Outcome::Worst => write!(f, "worst"),
        }
    }
}

/// Aggregate over one run's assignments. `total` sums `P - score` over
/// unflagged assignments, so higher is better.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    total: Cost,
    best: usize,
    mid: usize,
    worst: usize,
    cheaters: Vec<String>,
}

impl Score {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Best => self.best += 1,
            Outcome::Mid => self.mid += 1,
            Outcome::Worst => self.worst += 1,
        }
    }

    #[inline]
    pub fn add_to_total(&mut self, amount: Cost) {
        self.total += amount;
    }

    #[inline]
    pub fn add_cheater(&mut self, name: impl Into<String>) {
        self.cheaters.push(name.into());
    }

    #[inline]
    pub fn total(&self) -> Cost {
        self.total
    }

    #[inline]
    pub fn best(&self) -> usize {
        self.best
    }

    #[inline]
    pub fn mid(&self) -> usize {
        self.mid
    }

    #[inline]
    pub fn worst(&self) -> usize {
        self.worst
    }

    #[inline]
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Best => self.best,
            Outcome::Mid => self.mid,
            Outcome::Worst => self.worst,
        }
    }

    #[inline]
    pub fn cheaters(&self) -> &[String] {
        &self.cheaters
    }

    #[inline]
    pub fn assignments_scored(&self) -> usize {
        self.best + self.mid + self.worst
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score {} (best {}, mid {}, worst {}, cheaters {})",
            self.total,
            self.best,
            self.mid,
            self.worst,
            self.cheaters.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_buckets() {
        assert_eq!(Outcome::classify(1, 5), Outcome::Best);
        assert_eq!(Outcome::classify(2, 5), Outcome::Mid);
        assert_eq!(Outcome::classify(4, 5), Outcome::Mid);
        assert_eq!(Outcome::classify(5, 5), Outcome::Worst);
    }

    #[test]
    fn test_sentinel_wins_over_first_choice() {
        assert_eq!(Outcome::classify(1, 1), Outcome::Worst);
    }

    #[test]
    fn test_weights_above_plot_count_are_mid() {
        assert_eq!(Outcome::classify(9, 3), Outcome::Mid);
    }

    #[test]
    fn test_record_and_totals() {
        let mut s = Score::new();
        s.record(Outcome::Best);
        s.record(Outcome::Best);
        s.record(Outcome::Worst);
        s.add_to_total(4);
        s.add_cheater("D");
        assert_eq!(s.best(), 2);
        assert_eq!(s.mid(), 0);
        assert_eq!(s.count(Outcome::Worst), 1);
        assert_eq!(s.assignments_scored(), 3);
        assert_eq!(s.total(), 4);
        assert_eq!(s.cheaters(), &["D".to_string()]);
        assert_eq!(s.to_string(), "Score 4 (best 2, mid 0, worst 1, cheaters 1)");
    }
}
