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

use anyhow::{Context, Result};
use plot_alloc_model::prelude::{ParticipantConfig, PlotIdentifier, RosterConfig, Weight};
use rand::{Rng, seq::IndexedRandom};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateParams {
    pub players: usize,
    pub plots: usize,
    pub weights: usize,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            players: 35,
            plots: 50,
            weights: 5,
        }
    }
}

/// How strongly players are drawn to each plot. Plots are ordered from most
/// to least popular: the first 10% weigh 30, the next 10% weigh 10, the
/// next 30% weigh 4 and the rest weigh 1.
pub fn desirability(plots: usize) -> Vec<(PlotIdentifier, u32)> {
    PlotIdentifier::iter_all(plots)
        .enumerate()
        .map(|(i, plot)| {
            let w = if i < plots / 10 {
                30
            } else if i < plots / 5 {
                10
            } else if i < plots / 2 {
                4
            } else {
                1
            };
            (plot, w)
        })
        .collect()
}

/// Random roster where every player ranks `weights` distinct plots, drawn by
/// desirability and ranked 1.. in draw order.
pub fn generate<R: Rng + ?Sized>(params: GenerateParams, rng: &mut R) -> Result<RosterConfig> {
    let table = desirability(params.plots);
    let per_player = params.weights.min(params.plots);

    let mut participants = Vec::with_capacity(params.players);
    for n in 1..=params.players {
        let mut picked: Vec<PlotIdentifier> = Vec::with_capacity(per_player);
        while picked.len() < per_player {
            let (plot, _) = table
                .choose_weighted(rng, |(_, w)| *w)
                .context("desirability table has no positive weight")?;
            if !picked.contains(plot) {
                picked.push(*plot);
            }
        }

        let weights: BTreeMap<String, Weight> = picked
            .into_iter()
            .enumerate()
            .map(|(rank, plot)| (plot.into_inner().to_string(), rank as Weight + 1))
            .collect();

        participants.push(ParticipantConfig {
            name: format!("Player{n}"),
            weights,
        });
    }

    tracing::debug!(
        players = params.players,
        plots = params.plots,
        weights = per_player,
        "Generated roster"
    );

    Ok(RosterConfig {
        plots: params.plots,
        participants,
    })
}
