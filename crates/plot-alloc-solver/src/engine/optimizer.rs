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

use crate::{
    engine::err::OptimizeError,
    hungarian::KuhnMunkres,
    model::cost_matrix::CostMatrixBuilder,
    reconstruct::Reconstructor,
    scoring::ScoreClassifier,
};
use plot_alloc_model::prelude::{
    Assignment, AssignmentValidator, Roster, RosterSource, Score, TabularIngestor,
};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationResult {
    assignments: Vec<Assignment>,
    score: Score,
}

impl OptimizationResult {
    #[inline]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    #[inline]
    pub fn score(&self) -> &Score {
        &self.score
    }

    #[inline]
    pub fn assignment_for(&self, participant: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.participant() == participant)
    }

    #[inline]
    pub fn into_parts(self) -> (Vec<Assignment>, Score) {
        (self.assignments, self.score)
    }
}

/// Runs the whole pipeline: cost matrix, Kuhn–Munkres, reconstruction and
/// scoring. Holds configuration only, so one instance can serve any number
/// of concurrent runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimizer {
    ingestor: TabularIngestor,
    matrix_builder: CostMatrixBuilder,
}

impl Optimizer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_ingestor(mut self, ingestor: TabularIngestor) -> Self {
        self.ingestor = ingestor;
        self
    }

    #[inline]
    pub fn with_matrix_builder(mut self, builder: CostMatrixBuilder) -> Self {
        self.matrix_builder = builder;
        self
    }

    #[inline]
    pub fn ingestor(&self) -> &TabularIngestor {
        &self.ingestor
    }

    #[inline]
    pub fn matrix_builder(&self) -> &CostMatrixBuilder {
        &self.matrix_builder
    }

    /// Ingests `source` and optimizes the resulting roster.
    pub fn run(&self, source: &RosterSource) -> Result<OptimizationResult, OptimizeError> {
        let roster = source.ingest(&self.ingestor)?;
        self.optimize(&roster)
    }

    #[tracing::instrument(
        level = "debug",
        name = "Optimize",
        skip(self, roster),
        fields(plots = roster.plot_count(), participants = roster.len())
    )]
    pub fn optimize(&self, roster: &Roster) -> Result<OptimizationResult, OptimizeError> {
        let started = Instant::now();

        let costs = self.matrix_builder.build(roster);
        let matching = KuhnMunkres::new().solve(costs.matrix())?;
        tracing::debug!(
            total_cost = matching.total(),
            elapsed = ?started.elapsed(),
            "Solved assignment"
        );

        let assignments = Reconstructor::new().reconstruct(roster, matching.pairs());
        AssignmentValidator::validate(roster, &assignments)?;

        let mut score = ScoreClassifier::new().score(&assignments, roster.plot_count());
        // Flagged participants left without a plot are still reported.
        for p in roster.iter_flagged() {
            if !score.cheaters().iter().any(|c| c == p.name()) {
                score.add_cheater(p.name());
            }
        }

        tracing::debug!(
            assignments = assignments.len(),
            total = score.total(),
            best = score.best(),
            mid = score.mid(),
            worst = score.worst(),
            cheaters = score.cheaters().len(),
            elapsed = ?started.elapsed(),
            "Optimization finished"
        );

        Ok(OptimizationResult { assignments, score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hungarian::err::SolveError;
    use plot_alloc_model::prelude::{
        FlagReason, IngestError, Participant, PlotIdentifier, PreferenceSet, RosterConfig, Weight,
    };
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;

    #[inline]
    fn pid(n: u32) -> PlotIdentifier {
        PlotIdentifier::new(n)
    }

    fn prefs(pairs: &[(u32, Weight)]) -> PreferenceSet {
        pairs.iter().map(|&(p, w)| (pid(p), w)).collect()
    }

    fn grid(rows: &[&[&str]]) -> RosterSource {
        RosterSource::Grid(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_three_first_choices() {
        let roster = Roster::new(
            3,
            vec![
                Participant::new("A", prefs(&[(1, 1), (2, 2), (3, 3)])),
                Participant::new("B", prefs(&[(1, 2), (2, 1), (3, 3)])),
                Participant::new("C", prefs(&[(1, 3), (2, 3), (3, 1)])),
            ],
        )
        .unwrap();
        let res = Optimizer::new().optimize(&roster).unwrap();

        assert_eq!(
            res.assignments(),
            &[
                Assignment::new("A", pid(1), 1),
                Assignment::new("B", pid(2), 1),
                Assignment::new("C", pid(3), 1),
            ]
        );
        assert_eq!(res.score().best(), 3);
        assert_eq!(res.score().mid(), 0);
        assert_eq!(res.score().worst(), 0);
        // Each first choice is worth P - 1.
        assert_eq!(res.score().total(), 6);
        assert!(res.score().cheaters().is_empty());
    }

    #[test]
    fn test_duplicate_rank_in_sheet_is_flagged() {
        let res = Optimizer::new()
            .run(&grid(&[
                &["name", "1", "2", "3"],
                &["D", "2", "2", "1"],
                &["E", "1", "2", ""],
            ]))
            .unwrap();

        assert_eq!(res.score().cheaters(), &["D".to_string()]);
        let d = res.assignment_for("D").unwrap();
        assert!(d.is_flagged());
        assert_eq!(d.score(), 3);
        let e = res.assignment_for("E").unwrap();
        assert_eq!(e.plot(), pid(1));
        // Only E counts towards the total.
        assert_eq!(res.score().total(), 2);
    }

    #[test]
    fn test_repeated_weight_seven_is_flagged() {
        let mut header = vec!["name".to_string()];
        header.extend((1..=10).map(|p| p.to_string()));
        let mut row = vec!["X".to_string(), "7".to_string(), "7".to_string()];
        row.extend(std::iter::repeat_n(String::new(), 8));
        let res = Optimizer::new()
            .run(&RosterSource::Grid(vec![header, row]))
            .unwrap();
        assert_eq!(res.score().cheaters(), &["X".to_string()]);
        assert_eq!(res.score().total(), 0);
    }

    #[test]
    fn test_structured_source_trusts_duplicates() {
        let cfg: RosterConfig = serde_json::from_str(
            r#"{ "plots": 3, "participants": [ { "name": "D", "weights": { "1": 2, "2": 2, "3": 1 } } ] }"#,
        )
        .unwrap();
        let res = Optimizer::new().run(&RosterSource::Structured(cfg)).unwrap();
        assert!(res.score().cheaters().is_empty());
        assert_eq!(res.assignments()[0].plot(), pid(3));
    }

    #[test]
    fn test_fewer_participants_than_plots() {
        let roster = Roster::new(
            5,
            vec![
                Participant::new("A", prefs(&[(4, 1), (5, 2)])),
                Participant::new("B", prefs(&[(4, 1)])),
                Participant::new("C", prefs(&[(2, 1)])),
            ],
        )
        .unwrap();
        let res = Optimizer::new().optimize(&roster).unwrap();
        assert_eq!(res.assignments().len(), 3);
        assert_eq!(res.assignment_for("A").unwrap().plot(), pid(5));
        assert_eq!(res.assignment_for("B").unwrap().plot(), pid(4));
        assert_eq!(res.assignment_for("C").unwrap().plot(), pid(2));
    }

    #[test]
    fn test_more_participants_than_plots() {
        let ps = vec![
            Participant::new("A", prefs(&[(1, 1)])),
            Participant::new("B", prefs(&[(2, 1)])),
            Participant::new("C", prefs(&[(1, 1), (2, 1)])),
            Participant::new("D", PreferenceSet::new()),
        ];
        let roster = Roster::new(2, ps).unwrap();
        let res = Optimizer::new().optimize(&roster).unwrap();

        assert_eq!(res.assignments().len(), 2);
        assert_eq!(res.score().best(), 2);
        let plots: Vec<PlotIdentifier> = res.assignments().iter().map(|a| a.plot()).collect();
        assert!(plots.contains(&pid(1)));
        assert!(plots.contains(&pid(2)));
    }

    #[test]
    fn test_unassigned_cheater_is_still_reported() {
        let ps = vec![
            Participant::new("A", prefs(&[(1, 1)])),
            Participant::flagged(
                "D",
                FlagReason::DuplicateWeight {
                    plot: pid(1),
                    weight: 1,
                },
            ),
        ];
        let roster = Roster::new(1, ps).unwrap();
        let res = Optimizer::new().optimize(&roster).unwrap();
        assert_eq!(res.assignments().len(), 1);
        assert_eq!(res.assignments()[0].participant(), "A");
        assert_eq!(res.score().cheaters(), &["D".to_string()]);
    }

    #[test]
    fn test_nobody_ranked_anything_scores_sentinel() {
        let ps = (0..4)
            .map(|i| Participant::new(format!("P{i}"), PreferenceSet::new()))
            .collect();
        let roster = Roster::new(4, ps).unwrap();
        let res = Optimizer::new().optimize(&roster).unwrap();
        assert!(res.assignments().iter().all(|a| a.score() == 4));
        assert_eq!(res.score().worst(), 4);
        assert_eq!(res.score().total(), 0);
    }

    #[test]
    fn test_empty_roster_yields_nothing() {
        let roster = Roster::new(3, vec![]).unwrap();
        let res = Optimizer::new().optimize(&roster).unwrap();
        assert!(res.assignments().is_empty());
        assert_eq!(res.score(), &Score::default());
    }

    #[test]
    fn test_structural_errors_abort_the_run() {
        let err = Optimizer::new()
            .run(&grid(&[&["name", "a", "b"], &["A", "1", "2"]]))
            .unwrap_err();
        assert!(matches!(err, OptimizeError::Ingest(IngestError::NoPlotColumns)));
    }

    #[test]
    fn test_cost_at_numeric_limit_is_a_solve_error() {
        // Cells equal to the slack sentinel leave no augmenting path.
        let roster = Roster::new(2, vec![Participant::new("A", prefs(&[(1, 1)]))]).unwrap();
        let err = Optimizer::new()
            .with_matrix_builder(CostMatrixBuilder::new().ghost_cost(i64::MAX))
            .optimize(&roster)
            .unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::Solve(SolveError::NoAugmentingPath(_))
        ));
    }

    #[test]
    fn test_optimal_against_brute_force() {
        fn best_total(roster: &Roster) -> i64 {
            let p = roster.plot_count();
            let mut plots: Vec<usize> = (0..p).collect();
            let mut best = i64::MIN;
            permute(&mut plots, 0, &mut |perm| {
                let total: i64 = roster
                    .iter()
                    .zip(perm.iter())
                    .map(|(part, &col)| {
                        let w = part
                            .preferences()
                            .weight_or_sentinel(PlotIdentifier::from_column(col), p);
                        p as i64 - w as i64
                    })
                    .sum();
                best = best.max(total);
            });
            best
        }

        fn permute(xs: &mut Vec<usize>, k: usize, f: &mut dyn FnMut(&[usize])) {
            if k == xs.len() {
                f(xs);
                return;
            }
            for i in k..xs.len() {
                xs.swap(k, i);
                permute(xs, k + 1, f);
                xs.swap(k, i);
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let plots = rng.random_range(1..=6usize);
            let people = rng.random_range(1..=plots);
            let participants = (0..people)
                .map(|i| {
                    let mut cols: Vec<u32> = (1..=plots as u32).collect();
                    cols.shuffle(&mut rng);
                    let k = rng.random_range(0..=plots);
                    let set: PreferenceSet = cols
                        .into_iter()
                        .take(k)
                        .enumerate()
                        .map(|(rank, plot)| (pid(plot), rank as Weight + 1))
                        .collect();
                    Participant::new(format!("P{i}"), set)
                })
                .collect();
            let roster = Roster::new(plots, participants).unwrap();
            let res = Optimizer::new().optimize(&roster).unwrap();
            assert_eq!(res.assignments().len(), people);
            assert_eq!(res.score().total(), best_total(&roster));
        }
    }
}
